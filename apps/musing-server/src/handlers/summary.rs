//! AI summary handler.

use actix_web::{HttpResponse, web};

use musing_core::error::DomainError;
use musing_shared::dto::SummaryResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts/{slug}/summary
///
/// Provider failures come back as `200` with a `failed` status and the
/// inline message; only an unknown slug is an error.
pub async fn get_summary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            key: slug,
        })?;

    let summary = state.summaries.summarize(&post.slug, &post.content).await;

    Ok(HttpResponse::Ok().json(SummaryResponse {
        slug: post.slug,
        state: summary,
    }))
}
