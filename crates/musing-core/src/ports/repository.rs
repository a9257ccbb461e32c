use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - the catalog of published posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, newest first.
    async fn all_posts(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its slug. A miss is `Ok(None)`, not an error.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Publish a validated submission, deriving its slug from the title.
    async fn add_post(&self, post: NewPost) -> Result<Post, RepoError>;
}
