use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::NewPost;
use crate::error::DomainError;

/// Post entity - a published blog article.
///
/// `date` is kept as the raw publication string so that a malformed value
/// surfaces when the listing is ordered instead of disappearing on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: String,
}

impl Post {
    /// Build a stored post from validated submission data.
    pub fn publish(slug: String, data: NewPost, published_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            title: data.title,
            content: data.content,
            excerpt: data.excerpt,
            featured_image: data.featured_image,
            author: data.author,
            date: published_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            category: data.category,
            tags: data.tags,
            read_time: data.read_time,
        }
    }

    /// Parsed publication timestamp.
    pub fn published_at(&self) -> Result<DateTime<Utc>, DomainError> {
        parse_post_date(&self.date).map_err(|reason| DomainError::Parse {
            slug: self.slug.clone(),
            field: "date",
            reason,
        })
    }

    /// Publication date as shown on the detail page, e.g. `July 15, 2024`.
    pub fn display_date(&self) -> Result<String, DomainError> {
        Ok(self.published_at()?.format("%B %-d, %Y").to_string())
    }
}

/// Parse a post date. Accepts RFC 3339 timestamps and bare `YYYY-MM-DD`
/// dates, the latter read as midnight UTC.
pub fn parse_post_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| format!("\"{raw}\" is not an RFC 3339 timestamp or YYYY-MM-DD date"))
}

/// Order posts newest first. Equal dates keep their incoming order.
///
/// Fails on the first post whose date cannot be parsed; no post is dropped.
pub fn sort_by_recency(posts: Vec<Post>) -> Result<Vec<Post>, DomainError> {
    let mut keyed = posts
        .into_iter()
        .map(|post| post.published_at().map(|at| (at, post)))
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(keyed.into_iter().map(|(_, post)| post).collect())
}
