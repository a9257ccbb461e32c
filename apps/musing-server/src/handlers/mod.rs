//! HTTP handlers and route configuration.

mod auth;
mod health;
mod interests;
mod posts;
mod summary;

#[cfg(test)]
pub(crate) mod test_support;

use actix_web::web;

use crate::middleware::error::AppError;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(err.to_string()).into()
            }))
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/interests", web::get().to(interests::catalog))
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(posts::list_posts))
                            .route(web::post().to(posts::create_post)),
                    )
                    .service(
                        web::resource("/{slug}/summary")
                            .wrap(RateLimitMiddleware::new(state.rate_limiter.clone()))
                            .route(web::get().to(summary::get_summary)),
                    )
                    .route("/{slug}", web::get().to(posts::get_post)),
            )
            // Signed-in routes
            .service(
                web::resource("/profile/interests")
                    .route(web::get().to(interests::saved_interests))
                    .route(web::put().to(interests::update_interests)),
            )
            .route("/auth/me", web::get().to(auth::me)),
    );
}
