//! Interest catalog and saved-interest handlers.

use actix_web::{HttpResponse, web};

use musing_core::domain::{InterestSet, interest_catalog};
use musing_shared::dto::{InterestCatalogResponse, InterestsRequest, InterestsResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/interests
pub async fn catalog() -> HttpResponse {
    HttpResponse::Ok().json(InterestCatalogResponse {
        interests: interest_catalog().into_iter().map(String::from).collect(),
    })
}

/// GET /api/profile/interests
pub async fn saved_interests(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let interests = state.profiles.load(identity.user_id()).await?;

    Ok(HttpResponse::Ok().json(InterestsResponse {
        interests,
        message: None,
    }))
}

/// PUT /api/profile/interests - replaces the whole selection.
pub async fn update_interests(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<InterestsRequest>,
) -> AppResult<HttpResponse> {
    let interests = InterestSet::from_selection(body.into_inner().interests)?;
    state.profiles.save(identity.user_id(), &interests).await?;

    tracing::info!(
        user_id = %identity.user_id(),
        count = interests.len(),
        "Interests saved"
    );

    Ok(HttpResponse::Ok().json(InterestsResponse::saved(interests)))
}
