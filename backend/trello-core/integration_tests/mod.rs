mod api_client;
mod classifier;
mod error;
