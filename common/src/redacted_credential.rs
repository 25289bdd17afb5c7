//! Trello API key / token handling with redacted Debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// A credential that never exposes its value in logs or debug output.
///
/// Trello authenticates every request with a `key` and a `token` query
/// parameter; both are held in this wrapper.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedCredential {
    inner: String,
}

impl RedactedCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Raw value, for attaching to an outgoing request only.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Length in characters (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl fmt::Debug for RedactedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedCredential([REDACTED])")
    }
}

impl fmt::Display for RedactedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED CREDENTIAL]")
    }
}

impl Drop for RedactedCredential {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Credentials must never end up in a config file or a log payload.
impl serde::Serialize for RedactedCredential {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            type_name: "RedactedCredential",
            hint: "use expose() explicitly",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
