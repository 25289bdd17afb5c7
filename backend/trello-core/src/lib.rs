pub mod api_client;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use api_client::TrelloClient;
pub use classifier::{FieldError, FieldErrorCode, HttpFailure, ResponseErrorClassifier, classify};
pub use config::ClientConfig;
pub use error::{ApiClientError, ClassifiedError, CoreError};

pub const TRELLO_API_HOSTNAME: &str = "api.trello.com";
pub const TRELLO_API_VERSION: &str = "1";
pub const TRELLO_API_BASE_URL: &str =
    const_format::concatcp!("https://", TRELLO_API_HOSTNAME, "/", TRELLO_API_VERSION, "/");
