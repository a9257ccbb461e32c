//! Identity verification port.

use crate::domain::AuthUser;

/// Verifies bearer tokens issued by the identity provider.
pub trait TokenVerifier: Send + Sync {
    /// Validate a token and return the user it names.
    fn verify(&self, token: &str) -> Result<AuthUser, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
