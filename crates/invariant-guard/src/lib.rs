//! Guard-clause assertions with typed failures.
//!
//! Check a condition and get back either `Ok(())` or a typed error carrying
//! your message:
//!
//! - [`invariant`] fails with an [`InvariantError`], for states that should
//!   never happen.
//! - [`invariant_response`] fails with a [`ResponseError`] (status, body,
//!   headers) for input that should end the current request.
//! - [`invariant_json_response`] is the same with a `{"error": ..}` JSON body.
//!
//! Messages can be closures, which only run when the check fails.
//! [`ResponseError`] and [`Failure`] implement axum's `IntoResponse`, so a
//! handler can propagate them with `?` and the client gets the intended status.
//!
//! # Usage
//!
//! ```
//! use invariant_guard::{invariant_json_response, Failure};
//!
//! fn check_creature(kind: &str) -> Result<(), Failure> {
//!     invariant_json_response(kind == "Sky", "Creature must be of type Sky", None)?;
//!     Ok(())
//! }
//!
//! let err = check_creature("Underworld").unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! ```

pub mod assert;
pub mod condition;
pub mod error;
mod macros;
pub mod message;
pub mod response;

pub use assert::{invariant, invariant_json_response, invariant_response, JSON_CONTENT_TYPE};
pub use condition::Condition;
pub use error::{Failure, InvariantError, Result};
pub use message::{IntoMessage, Message};
pub use response::{ResponseError, ResponseInit, DEFAULT_STATUS};
