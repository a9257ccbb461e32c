//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub sign_in: bool,
    pub rate_limited: bool,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        sign_in: state.tokens.is_some(),
        rate_limited: state.rate_limiter.is_some(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::Value;

    use crate::handlers::test_support::{test_app, test_state};

    #[actix_web::test]
    async fn test_health() {
        let app = test_app!(test_state());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["sign_in"], true);
        assert_eq!(body["rate_limited"], false);
    }
}
