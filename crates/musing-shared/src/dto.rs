//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use musing_core::domain::{AuthUser, InterestSet, Post, ShareLinks};
use musing_core::feed::{EmptyState, FeedView};
use musing_core::summary::SummaryState;

pub const POST_CREATED_MESSAGE: &str = "Post created successfully!";

/// `GET /api/posts` query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    pub q: Option<String>,
}

/// The feed as rendered on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub heading: String,
    pub posts: Vec<Post>,
    pub show_interest_banner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyStateBody>,
}

/// Empty-feed placeholder: a machine-readable kind plus the text to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyStateBody {
    pub kind: String,
    pub message: String,
}

impl From<&EmptyState> for EmptyStateBody {
    fn from(state: &EmptyState) -> Self {
        let kind = match state {
            EmptyState::LoadingInterests => "loading_interests",
            EmptyState::NoSearchMatches { .. } => "no_search_matches",
            EmptyState::NoInterestMatches => "no_interest_matches",
            EmptyState::NoPosts => "no_posts",
        };
        Self {
            kind: kind.to_string(),
            message: state.message(),
        }
    }
}

impl From<FeedView> for FeedResponse {
    fn from(view: FeedView) -> Self {
        Self {
            heading: view.heading.to_string(),
            empty_state: view.empty_state.as_ref().map(EmptyStateBody::from),
            show_interest_banner: view.show_interest_banner,
            posts: view.posts,
        }
    }
}

/// A single post with its detail-page extras.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: Post,
    pub display_date: String,
    pub share: ShareLinks,
}

/// Successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub success: bool,
    pub slug: String,
    pub message: String,
}

impl CreatePostResponse {
    pub fn created(slug: impl Into<String>) -> Self {
        Self {
            success: true,
            slug: slug.into(),
            message: POST_CREATED_MESSAGE.to_string(),
        }
    }
}

/// Summary panel contents for one post.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub slug: String,
    #[serde(flatten)]
    pub state: SummaryState,
}

/// `GET /api/interests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestCatalogResponse {
    pub interests: Vec<String>,
}

/// `PUT /api/profile/interests` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestsRequest {
    pub interests: Vec<String>,
}

/// Saved interests, with the confirmation text after an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestsResponse {
    pub interests: InterestSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InterestsResponse {
    pub fn saved(interests: InterestSet) -> Self {
        let tail = if interests.is_empty() {
            "Clear your selections to see all posts."
        } else {
            "Recommendations on the homepage will now be tailored."
        };
        Self {
            message: Some(format!("Your preferences have been updated. {tail}")),
            interests,
        }
    }
}

/// Response containing the signed-in user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<AuthUser> for UserResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
        }
    }
}
