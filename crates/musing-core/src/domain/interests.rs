use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Post;
use crate::error::{DomainError, FieldErrors};

/// Topics a reader can pick on the interests page.
pub const INTEREST_CATALOG: [&str; 16] = [
    "Minimalism",
    "Personal Growth",
    "Simplicity",
    "Mindfulness",
    "Well-being",
    "Productivity",
    "Self-care",
    "Lifestyle",
    "Time Management",
    "Technology",
    "Travel",
    "Food",
    "Finance",
    "Boundaries",
    "Routine",
    "Self-respect",
];

/// The catalog in display (alphabetical) order.
pub fn interest_catalog() -> Vec<&'static str> {
    let mut catalog = INTEREST_CATALOG.to_vec();
    catalog.sort_unstable();
    catalog
}

/// A reader's selected interests. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestSet(BTreeSet<String>);

impl InterestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a raw selection: entries are trimmed, blanks and
    /// duplicates dropped, and anything outside the catalog rejected.
    pub fn from_selection<I, S>(selection: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        let mut errors = FieldErrors::new();

        for raw in selection {
            let interest = raw.as_ref().trim();
            if interest.is_empty() {
                continue;
            }
            if !INTEREST_CATALOG.contains(&interest) {
                errors.add("interests", format!("Unknown interest: {interest}"));
                continue;
            }
            set.0.insert(interest.to_string());
        }

        if errors.is_empty() {
            Ok(set)
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    pub fn contains(&self, interest: &str) -> bool {
        self.0.contains(interest)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// A post matches when its category or any of its tags is selected.
    pub fn matches(&self, post: &Post) -> bool {
        self.contains(&post.category) || post.tags.iter().any(|tag| self.contains(tag))
    }
}

impl<S: Into<String>> FromIterator<S> for InterestSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
