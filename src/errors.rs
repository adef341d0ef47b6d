// ABOUTME: Error types for the deck-viewer application
// ABOUTME: Provides structured error handling for requests, decoding and output

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Request to slide service failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Slide service returned HTTP {status} for {url}: {detail}")]
    HttpStatusError {
        status: u16,
        url: String,
        detail: String,
    },

    /// User-facing failure recorded by the application shell
    #[error("{0}")]
    RequestFailed(String),

    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("HTML generation error: {0}")]
    HtmlError(String),

    #[error("Failed to render page template: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Preview server error: {0}")]
    ServerError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

impl From<url::ParseError> for DeckError {
    fn from(err: url::ParseError) -> Self {
        DeckError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
