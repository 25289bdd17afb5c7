//! Response error classification.
//!
//! Turns a failed Trello HTTP exchange (status code + already-decoded body)
//! into exactly one [`ClassifiedError`]. The rules live in an ordered table
//! and the first one that matches wins:
//!
//! | order | status | body requirement                  | result             |
//! |-------|--------|-----------------------------------|--------------------|
//! | 1     | 429    | none, body is ignored             | `RateLimited`      |
//! | 2     | 400    | object with `message`             | `BadRequest`       |
//! | 3     | 401    | object with `message`             | `Unauthorized`     |
//! | 4     | 422    | object with `message` and `errors` list | `ValidationFailed` |
//! | -     | any    | fallback                          | `Generic`          |
//!
//! A key holding JSON `null` counts as absent.

pub mod field_error;

pub use field_error::{FieldError, FieldErrorCode};

use crate::error::classified::{ClassifiedError, value_text};

use common::HttpStatusCode;

use log::{debug, warn};
use serde_json::{Map, Value};

const MESSAGE_KEY: &str = "message";
const ERRORS_KEY: &str = "errors";

/// A completed exchange the transport has already decided is a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HttpFailure<'a> {
    pub status_code: HttpStatusCode,
    /// Decoded response body; `None` when there was none or it was not JSON.
    pub body: Option<&'a Value>,
}

impl<'a> HttpFailure<'a> {
    pub fn new(status_code: impl Into<HttpStatusCode>, body: Option<&'a Value>) -> Self {
        Self {
            status_code: status_code.into(),
            body,
        }
    }

    /// The body, when it is a JSON object carrying a `message`.
    fn message_body(&self) -> Option<&'a Map<String, Value>> {
        self.body
            .and_then(Value::as_object)
            .filter(|object| present(object, MESSAGE_KEY).is_some())
    }
}

type Rule = fn(&HttpFailure<'_>) -> Option<ClassifiedError>;

/// Evaluated top to bottom. Reordering changes behavior.
const RULES: &[(&str, Rule)] = &[
    ("rate_limited", rate_limited),
    ("bad_request", bad_request),
    ("unauthorized", unauthorized),
    ("validation_failed", validation_failed),
];

/// Stateless classifier for failed Trello API responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseErrorClassifier;

impl ResponseErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a failed exchange. Never fails; anything without a more
    /// specific rule becomes [`ClassifiedError::Generic`].
    pub fn classify(
        &self,
        status_code: impl Into<HttpStatusCode>,
        body: Option<&Value>,
    ) -> ClassifiedError {
        self.classify_failure(&HttpFailure::new(status_code, body))
    }

    pub fn classify_failure(&self, failure: &HttpFailure<'_>) -> ClassifiedError {
        for (name, rule) in RULES {
            if let Some(error) = rule(failure) {
                debug!("Classified HTTP {} response as {}", failure.status_code, name);
                return error;
            }
        }

        debug!(
            "No specific rule for HTTP {} response, using generic error",
            failure.status_code
        );
        generic(failure)
    }
}

/// Shorthand for [`ResponseErrorClassifier::classify`].
pub fn classify(status_code: impl Into<HttpStatusCode>, body: Option<&Value>) -> ClassifiedError {
    ResponseErrorClassifier.classify(status_code, body)
}

fn rate_limited(failure: &HttpFailure<'_>) -> Option<ClassifiedError> {
    (failure.status_code == HttpStatusCode::TOO_MANY_REQUESTS).then(ClassifiedError::rate_limited)
}

fn bad_request(failure: &HttpFailure<'_>) -> Option<ClassifiedError> {
    if failure.status_code != HttpStatusCode::BAD_REQUEST {
        return None;
    }
    let message = present(failure.message_body()?, MESSAGE_KEY)?;
    Some(ClassifiedError::BadRequest {
        message: value_text(message),
    })
}

fn unauthorized(failure: &HttpFailure<'_>) -> Option<ClassifiedError> {
    if failure.status_code != HttpStatusCode::UNAUTHORIZED {
        return None;
    }
    let message = present(failure.message_body()?, MESSAGE_KEY)?;
    Some(ClassifiedError::Unauthorized {
        message: value_text(message),
    })
}

fn validation_failed(failure: &HttpFailure<'_>) -> Option<ClassifiedError> {
    if failure.status_code != HttpStatusCode::UNPROCESSABLE_ENTITY {
        return None;
    }
    let errors = present(failure.message_body()?, ERRORS_KEY)?;
    let Some(errors) = errors.as_array() else {
        warn!("Ignoring 422 response whose `errors` is not a list: {errors}");
        return None;
    };

    let messages = errors.iter().map(render_entry).collect();
    Some(ClassifiedError::ValidationFailed { messages })
}

fn generic(failure: &HttpFailure<'_>) -> ClassifiedError {
    let message = match failure.body {
        Some(Value::Object(object)) => present(object, MESSAGE_KEY)
            .cloned()
            .unwrap_or_else(|| Value::Object(object.clone())),
        Some(body) => body.clone(),
        None => Value::Null,
    };

    ClassifiedError::Generic {
        status_code: failure.status_code,
        message,
    }
}

fn render_entry(entry: &Value) -> String {
    match FieldError::from_value(entry) {
        Ok(field_error) => field_error.render(),
        Err(e) => {
            warn!("Malformed entry in `errors` list ({e}), using it verbatim");
            value_text(entry)
        }
    }
}

/// Value under `key`, treating JSON `null` as absent.
fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
