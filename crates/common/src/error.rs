//! Unified error type for payment review.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown service item: {0}")]
    UnknownServiceItem(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Persistence failed for service item {item_id}: {message}")]
    Persistence { item_id: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
