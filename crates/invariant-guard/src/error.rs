//! Error types produced by failed assertions.
//!
//! [`InvariantError`] signals a programmer error or an impossible state.
//! [`ResponseError`] signals a validation failure that should end a request.
//! [`Failure`] holds either one so handlers can use `?` on both.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ResponseError;

/// Generic invariant failure carrying the resolved message.
///
/// Displays as the bare message passed to [`invariant`](crate::invariant).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvariantError {
    message: String,
}

impl InvariantError {
    /// Create an invariant error from an already resolved message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The resolved message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Either kind of assertion failure.
#[derive(Error, Debug)]
pub enum Failure {
    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl Failure {
    /// Get the HTTP status code this failure renders with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Failure::Invariant(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Failure::Response(err) => err.status(),
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Failure::Invariant(_) => "INTERNAL_ERROR",
            Failure::Response(_) => "RESPONSE",
        }
    }

    /// Whether this failure is meant to be shown to the client
    pub fn is_user_error(&self) -> bool {
        matches!(self, Failure::Response(_))
    }
}

/// Body sent to clients when an invariant failure reaches the HTTP boundary.
#[derive(Debug, Serialize)]
struct InternalErrorBody {
    error: &'static str,
    message: &'static str,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        match self {
            Failure::Response(err) => err.into_response(),
            Failure::Invariant(err) => {
                tracing::error!(reason = %err.message(), "Invariant failure reached request boundary");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InternalErrorBody {
                        error: "INTERNAL_ERROR",
                        message: "Internal invariant violated",
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for assertion-guarded code
pub type Result<T, E = Failure> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InvariantError::new("Creature must be of type Fire");
        assert_eq!(err.to_string(), "Creature must be of type Fire");
        assert_eq!(err.message(), "Creature must be of type Fire");
    }

    #[test]
    fn test_failure_from_invariant() {
        let failure: Failure = InvariantError::new("broken").into();
        assert!(matches!(failure, Failure::Invariant(_)));
        assert_eq!(failure.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failure.error_code(), "INTERNAL_ERROR");
        assert!(!failure.is_user_error());
        // transparent display
        assert_eq!(failure.to_string(), "broken");
    }

    #[test]
    fn test_failure_from_response() {
        let failure: Failure = ResponseError::new("bad", None).into();
        assert!(matches!(failure, Failure::Response(_)));
        assert_eq!(failure.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(failure.error_code(), "RESPONSE");
        assert!(failure.is_user_error());
    }

    #[test]
    fn test_invariant_failure_renders_as_500() {
        let response = Failure::from(InvariantError::new("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_failure_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InvariantError>();
        assert_send_sync::<ResponseError>();
        assert_send_sync::<Failure>();
    }
}
