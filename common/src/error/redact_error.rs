use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-holding type is asked to serialize itself.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {type_name} cannot be serialized - {hint} {location}")]
    Serialization {
        type_name: &'static str,
        hint: &'static str,
        location: ErrorLocation,
    },
}
