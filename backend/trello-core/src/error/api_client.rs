use crate::error::classified::ClassifiedError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The server answered with a failure status; `error` says which kind.
    #[error("Trello API Error: HTTP {} - {error} {location}", .error.status_code())]
    Classified {
        #[source]
        error: ClassifiedError,
        location: ErrorLocation,
    },
}

impl ApiClientError {
    #[track_caller]
    pub fn classified(error: ClassifiedError) -> Self {
        ApiClientError::Classified {
            error,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The classified failure, if the server answered at all.
    pub fn as_classified(&self) -> Option<&ClassifiedError> {
        match self {
            ApiClientError::Classified { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        self.as_classified().map(ClassifiedError::status_code)
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
