//! # Musing Core
//!
//! The domain layer of the Musing blog backend.
//! This crate contains the post model, the feed engine and the port traits,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod feed;
pub mod markup;
pub mod ports;
pub mod summary;

pub use error::{DomainError, FieldErrors, RepoError};
