//! Authentication extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use musing_core::domain::AuthUser;
use musing_core::ports::AuthError;
use musing_shared::ErrorResponse;

use crate::state::AppState;

/// Authenticated reader extractor.
///
/// Use this in handlers to require a signed-in reader:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: AuthUser,
}

impl Identity {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("Your sign-in has expired. Please sign in again."),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Please provide a valid Bearer token in the Authorization header."),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthError> {
    let token = bearer_token(req)?;

    let verifier = req
        .app_data::<web::Data<AppState>>()
        .and_then(|state| state.tokens.clone())
        .ok_or_else(|| {
            tracing::warn!("Bearer token received but no token verifier is configured");
            AuthError::InvalidToken("Sign-in is not available on this server".to_string())
        })?;

    let user = verifier.verify(token)?;
    Ok(Identity { user })
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(AuthenticationError))
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
///
/// An absent header means an anonymous reader; a token that fails
/// verification is logged and also treated as anonymous.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match authenticate(req) {
            Ok(identity) => ready(Ok(OptionalIdentity(Some(identity)))),
            Err(AuthError::MissingAuth) => ready(Ok(OptionalIdentity(None))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable identity token");
                ready(Ok(OptionalIdentity(None)))
            }
        }
    }
}
