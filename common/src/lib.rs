//! Shared building blocks for the Trello client workspace.
//!
//! Everything here is plain data with no network or filesystem access, so
//! the backend crates can depend on it freely.
//!
//! - [`ErrorLocation`]: call-site capture for error values
//! - [`HttpStatusCode`]: status code helpers used by error classification
//! - [`RedactedCredential`]: API key / token wrapper that never leaks

pub mod error;
pub mod http_status;
pub mod redacted_credential;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_credential::RedactedCredential;

#[cfg(test)]
mod tests;
