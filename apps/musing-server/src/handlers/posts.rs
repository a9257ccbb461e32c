//! Post listing, detail and submission handlers.

use actix_web::{HttpResponse, web};

use musing_core::domain::{PostSubmission, ShareLinks};
use musing_core::error::DomainError;
use musing_core::feed::{FeedContext, build_feed};
use musing_shared::dto::{CreatePostResponse, FeedQuery, FeedResponse, PostDetailResponse};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts?q=
///
/// Personalised by the reader's saved interests when a valid token is sent.
pub async fn list_posts(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    query: web::Query<FeedQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.all_posts().await?;

    let ctx = match identity.0 {
        Some(identity) => {
            let interests = match state.profiles.load(identity.user_id()).await {
                Ok(interests) => interests,
                Err(e) => {
                    tracing::warn!(
                        user_id = %identity.user_id(),
                        error = %e,
                        "Could not load interests, showing unfiltered feed"
                    );
                    Default::default()
                }
            };
            FeedContext::signed_in(interests)
        }
        None => FeedContext::anonymous(),
    };
    let ctx = match query.into_inner().q {
        Some(q) => ctx.with_query(q),
        None => ctx,
    };

    let view = build_feed(posts, &ctx);
    tracing::debug!(count = view.posts.len(), heading = %view.heading, "Feed built");

    Ok(HttpResponse::Ok().json(FeedResponse::from(view)))
}

/// GET /api/posts/{slug}
pub async fn get_post(
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

    let display_date = post.display_date()?;
    let share = ShareLinks::build(&state.site_url, &post.slug, &post.title)
        .map_err(|e| AppError::Internal(format!("share links for {}: {}", post.slug, e)))?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post,
        display_date,
        share,
    }))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostSubmission>,
) -> AppResult<HttpResponse> {
    let new_post = body.into_inner().into_new_post()?;
    let stored = state.posts.add_post(new_post).await?;

    Ok(HttpResponse::Created().json(CreatePostResponse::created(stored.slug)))
}
