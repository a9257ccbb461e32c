//! In-memory post repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use musing_core::domain::{NewPost, Post, slugify, sort_by_recency};
use musing_core::error::{DomainError, FieldErrors, RepoError};
use musing_core::ports::PostRepository;

use super::seed::sample_posts;

/// Post repository backed by a `Vec` behind an async `RwLock`.
///
/// Posts live for the lifetime of the process; nothing is written to disk.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Repository pre-loaded with the sample posts.
    pub fn seeded() -> Self {
        Self::with_posts(sample_posts())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn all_posts(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await.clone();
        Ok(sort_by_recency(posts)?)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn add_post(&self, post: NewPost) -> Result<Post, RepoError> {
        let slug = slugify(&post.title);
        if slug.is_empty() {
            return Err(DomainError::Validation(FieldErrors::single(
                "title",
                "Title must contain at least one letter or number.",
            ))
            .into());
        }

        // collision check and insert share one write guard
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.slug == slug) {
            return Err(RepoError::Duplicate(slug));
        }

        let stored = Post::publish(slug, post, Utc::now());
        posts.push(stored.clone());

        tracing::info!(slug = %stored.slug, "Post published");
        Ok(stored)
    }
}
