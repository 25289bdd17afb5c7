//! The closed taxonomy of classified Trello API failures.
//!
//! Key design decisions:
//! - One enum variant per failure kind; callers `match` instead of probing types
//! - `Display` is the ready-to-show message for every variant
//! - No `ErrorLocation`: two classifications of the same response compare equal

use common::HttpStatusCode;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

/// Message carried by every rate-limited classification.
pub const RATE_LIMITED_MESSAGE: &str = "Wait a second.";

/// A failed HTTP exchange mapped to exactly one kind of failure.
#[derive(Debug, Clone, PartialEq, Eq, ThisError, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ClassifiedError {
    /// HTTP 429. The response body is never inspected.
    #[error("{message}")]
    RateLimited { message: String },

    /// HTTP 400 with a `message` in the body.
    #[error("{message}")]
    BadRequest { message: String },

    /// HTTP 401 with a `message` in the body.
    #[error("{message}")]
    Unauthorized { message: String },

    /// HTTP 422 with a `message` and an `errors` list, one rendered sentence
    /// per field error in response order.
    #[error("Validation Failed: {}", .messages.join(", "))]
    ValidationFailed { messages: Vec<String> },

    /// Anything no other rule matched. `message` is the body's `message`
    /// value when there is one, otherwise the raw body (`Null` when absent).
    #[error("{}", value_text(.message))]
    Generic {
        status_code: HttpStatusCode,
        message: Value,
    },
}

impl ClassifiedError {
    pub fn rate_limited() -> Self {
        ClassifiedError::RateLimited {
            message: RATE_LIMITED_MESSAGE.to_string(),
        }
    }

    pub fn status_code(&self) -> HttpStatusCode {
        match self {
            ClassifiedError::RateLimited { .. } => HttpStatusCode::TOO_MANY_REQUESTS,
            ClassifiedError::BadRequest { .. } => HttpStatusCode::BAD_REQUEST,
            ClassifiedError::Unauthorized { .. } => HttpStatusCode::UNAUTHORIZED,
            ClassifiedError::ValidationFailed { .. } => HttpStatusCode::UNPROCESSABLE_ENTITY,
            ClassifiedError::Generic { status_code, .. } => *status_code,
        }
    }

    /// Get error category for log fields.
    pub fn error_category(&self) -> &'static str {
        match self {
            ClassifiedError::RateLimited { .. } => "rate_limited",
            ClassifiedError::BadRequest { .. } => "bad_request",
            ClassifiedError::Unauthorized { .. } => "unauthorized",
            ClassifiedError::ValidationFailed { .. } => "validation_failed",
            ClassifiedError::Generic { .. } => "generic",
        }
    }

    /// The ready-to-display message. For validation failures this is the
    /// composite `Validation Failed: a, b` form.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Rendered field errors of a validation failure; empty for other kinds.
    pub fn validation_messages(&self) -> &[String] {
        match self {
            ClassifiedError::ValidationFailed { messages } => messages,
            _ => &[],
        }
    }
}

/// Text form of a JSON value: strings unquoted, `null` empty, anything else
/// as compact JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
