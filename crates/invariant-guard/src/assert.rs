//! The assertion functions.
//!
//! Each one checks a [`Condition`] and returns `Ok(())` when it holds. When it
//! does not, the message is resolved and returned as a typed error.
//!
//! Rust has no flow-sensitive narrowing for function calls, so a successful
//! check tells the compiler nothing about the condition. Use
//! [`ensure!`](crate::ensure) when the remaining code needs to rely on the
//! check by construction.

use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};

use crate::condition::Condition;
use crate::error::InvariantError;
use crate::message::IntoMessage;
use crate::response::{ResponseError, ResponseInit, DEFAULT_STATUS};

/// Content type forced by [`invariant_json_response`].
pub const JSON_CONTENT_TYPE: &str = "text/json";

/// Fail with an [`InvariantError`] if `condition` does not hold.
///
/// A closure message is only run on failure.
///
/// ```
/// use invariant_guard::invariant;
///
/// let value = "Dragon";
/// assert!(invariant(value == "Dragon", "Creature must be a Dragon").is_ok());
///
/// let err = invariant(value == "Fire", || format!("{value} is not Fire")).unwrap_err();
/// assert_eq!(err.message(), "Dragon is not Fire");
/// ```
pub fn invariant<'a>(
    condition: impl Condition,
    message: impl IntoMessage<'a>,
) -> Result<(), InvariantError> {
    if condition.holds() {
        return Ok(());
    }

    let message = message.into_message().resolve();
    tracing::debug!(reason = %message, "Invariant failed");
    Err(InvariantError::new(message))
}

/// Fail with a [`ResponseError`] if `condition` does not hold.
///
/// The resolved message becomes the response body. `init` can set the status
/// (400 otherwise) and headers; it never replaces the body.
///
/// ```
/// use invariant_guard::{invariant_response, ResponseInit};
/// use axum::http::StatusCode;
///
/// let err = invariant_response(false, "Creature must be of type Water", None).unwrap_err();
/// assert_eq!(err.status(), StatusCode::BAD_REQUEST);
///
/// let init = ResponseInit::new().status(StatusCode::CONFLICT);
/// let err = invariant_response(false, "taken", Some(init)).unwrap_err();
/// assert_eq!(err.status(), StatusCode::CONFLICT);
/// ```
pub fn invariant_response<'a>(
    condition: impl Condition,
    message: impl IntoMessage<'a>,
    init: Option<ResponseInit>,
) -> Result<(), ResponseError> {
    if condition.holds() {
        return Ok(());
    }

    let err = ResponseError::new(message.into_message().resolve(), init);
    tracing::debug!(status = %err.status(), "Response invariant failed");
    Err(err)
}

/// Shorthand for [`invariant_response`] with a JSON error body.
///
/// The body is `{"error": message}` and `Content-Type: text/json` is always
/// set. `status` falls back to 400 when it is `None` or `0`; anything outside
/// 200..=599 becomes a 500.
///
/// ```
/// use invariant_guard::invariant_json_response;
/// use axum::http::StatusCode;
///
/// let err = invariant_json_response(false, "value must be a string", Some(0)).unwrap_err();
/// assert_eq!(err.status(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.body(), r#"{"error":"value must be a string"}"#);
///
/// let err = invariant_json_response(false, "value must be a string", Some(503)).unwrap_err();
/// assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
/// ```
pub fn invariant_json_response(
    condition: impl Condition,
    message: &str,
    status: Option<u16>,
) -> Result<(), ResponseError> {
    if condition.holds() {
        return Ok(());
    }

    let init = ResponseInit::new()
        .status(json_status(status))
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    let body = serde_json::json!({ "error": message }).to_string();

    invariant_response(false, body, Some(init))
}

/// Zero counts as "not given". Only success, redirect and error codes can end
/// a request, so informational and out-of-range codes are rejected.
fn json_status(status: Option<u16>) -> StatusCode {
    match status {
        None | Some(0) => DEFAULT_STATUS,
        Some(code) => match StatusCode::from_u16(code) {
            Ok(status) if (200..=599).contains(&code) => status,
            _ => {
                tracing::warn!(code, "Invalid HTTP status code, responding with 500");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
    }
}
