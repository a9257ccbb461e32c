//! Domain-level error types.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Field-keyed validation messages, e.g. `excerpt -> ["Excerpt must be ..."]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error set.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with key {key}")]
    NotFound { entity_type: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Could not parse {field} of post {slug}: {reason}")]
    Parse {
        slug: String,
        field: &'static str,
        reason: String,
    },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Slug already taken: {0}")]
    Duplicate(String),

    #[error("Invalid record: {0}")]
    Domain(#[from] DomainError),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(slug) => DomainError::Validation(FieldErrors::single(
                "title",
                format!("A post with the slug \"{slug}\" already exists. Please choose a different title."),
            )),
            RepoError::Domain(inner) => inner,
        }
    }
}
