//! HTTP-style response failures.
//!
//! A [`ResponseError`] is what a failed response assertion produces. It holds
//! everything a request boundary needs to answer the client (status, body,
//! headers) and renders itself through axum's [`IntoResponse`].

use axum::{
    http::{header::IntoHeaderName, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Status used when the caller does not pick one.
pub const DEFAULT_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Options for the response produced by a failed response assertion.
///
/// Only the status and headers can be configured. The body is always the
/// resolved assertion message.
#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    /// Status code; [`DEFAULT_STATUS`] when unset.
    pub status: Option<StatusCode>,
    /// Headers carried on the response.
    pub headers: HeaderMap,
}

impl ResponseInit {
    /// Create empty options: default status, no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Set a header, replacing any value already set under the same name.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge a header map; entries from `headers` replace existing ones.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }
}

impl From<StatusCode> for ResponseInit {
    fn from(status: StatusCode) -> Self {
        Self::new().status(status)
    }
}

/// Failure meant to end a request with the carried status, body and headers.
#[derive(Debug, Clone, Error)]
#[error("Response {status}: {body}")]
pub struct ResponseError {
    status: StatusCode,
    body: String,
    headers: HeaderMap,
}

impl ResponseError {
    /// Build a response failure from a body and options.
    ///
    /// Defaults apply first and the caller's options win.
    pub fn new(body: impl Into<String>, init: Option<ResponseInit>) -> Self {
        let init = init.unwrap_or_default();
        Self {
            status: init.status.unwrap_or(DEFAULT_STATUS),
            body: body.into(),
            headers: init.headers,
        }
    }

    /// Status code the response is sent with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body, the resolved assertion message.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Headers carried on the response.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Split into status, headers and body.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, String) {
        (self.status, self.headers, self.body)
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        // Caller headers are applied after the body, so they replace the
        // default text/plain content type.
        (self.status, self.headers, self.body).into_response()
    }
}
