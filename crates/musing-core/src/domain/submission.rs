//! Post submission - the authoring form and its validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{DomainError, FieldErrors};

const TAGS_REQUIRED: &str = "Please enter at least one tag, comma-separated.";

/// Raw form data submitted by an author. Tags arrive comma-separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PostSubmission {
    #[validate(length(min = 3, message = "Title must be at least 3 characters long."))]
    pub title: String,

    #[validate(length(min = 10, message = "Content must be at least 10 characters long."))]
    pub content: String,

    #[validate(length(min = 5, message = "Excerpt must be at least 5 characters long."))]
    pub excerpt: String,

    #[validate(url(
        message = "Please enter a valid URL for the featured image. Use https://placehold.co/800x450.png for a placeholder."
    ))]
    pub featured_image: String,

    #[validate(length(min = 2, message = "Author name must be at least 2 characters long."))]
    pub author: String,

    #[validate(length(min = 2, message = "Category must be at least 2 characters long."))]
    pub category: String,

    pub tags: String,

    #[validate(length(min = 1, message = "Read time is required (e.g., '5 min read')."))]
    pub read_time: String,
}

/// Validated post data, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: String,
}

impl PostSubmission {
    /// Check every field and collect all failures keyed by field name.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Err(report) = self.validate() {
            for (field, failures) in report.field_errors() {
                for failure in failures.iter() {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    errors.add(wire_name(&field), message);
                }
            }
        }

        if split_tags(&self.tags).is_empty() {
            errors.add("tags", TAGS_REQUIRED);
        }

        errors
    }

    /// Validate and convert into [`NewPost`].
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(NewPost {
            tags: split_tags(&self.tags),
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            featured_image: self.featured_image,
            author: self.author,
            category: self.category,
            read_time: self.read_time,
        })
    }
}

/// Split a comma-separated tag list, trimming entries and dropping blanks.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

// Error keys follow the camelCase wire names.
fn wire_name(field: &str) -> &str {
    match field {
        "featured_image" => "featuredImage",
        "read_time" => "readTime",
        other => other,
    }
}
