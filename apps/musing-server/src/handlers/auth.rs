//! Identity handlers.

use actix_web::HttpResponse;

use musing_shared::dto::UserResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;

/// GET /api/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(UserResponse::from(identity.user)))
}
