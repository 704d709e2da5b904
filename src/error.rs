//! Error types for the JSON-LD catalog service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonLdError {
    #[error("Failed to load catalog from {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Unknown content type '{0}'")]
    UnknownContentType(String),

    #[error("No {content_type} record with identifier '{id}'")]
    NotFound { content_type: String, id: String },

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
