//! Unified client error handling
//!
//! Every user action ends in one of these errors or succeeds. The public
//! message is what the page shows; details only go to the log.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing element: #{0}")]
    MissingElement(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Status { .. } => "HTTP_STATUS",
            Self::Decode(_) => "DECODE_ERROR",
            Self::MissingElement(_) => "MISSING_ELEMENT",
            Self::UnknownTab(_) => "UNKNOWN_TAB",
            Self::Pdf(_) => "PDF_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to put in front of the user.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Status { message, .. } => message.clone(),
            Self::Network(_) => "Failed to reach the server".to_string(),
            // Don't leak internal error details
            Self::Decode(_)
            | Self::MissingElement(_)
            | Self::UnknownTab(_)
            | Self::Pdf(_)
            | Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement(id.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
