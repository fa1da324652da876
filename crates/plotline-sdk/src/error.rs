//! Error types for the Plotline SDK.

use thiserror::Error;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a failed response carries no usable body.
pub(crate) const FALLBACK_MESSAGE: &str = "request failed";

/// Errors that can occur when talking to the backend.
///
/// Every failure surfaces as one of these values; nothing is retried or
/// recovered inside the SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error during client setup.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },

    /// HTTP transport failed before a response was produced.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A response body could not be decoded into the expected record.
    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// A streaming response broke mid-flight.
    #[error("Streaming error: {message}")]
    Stream {
        /// What went wrong while streaming.
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an API error from response details.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a streaming error.
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    /// Best-effort human-readable message for display.
    ///
    /// For [`Error::Api`] this is the message derived from the response
    /// body, without the status prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Config { message } | Self::Api { message, .. } | Self::Stream { message } => {
                message.clone()
            }
            Self::Http(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Get the HTTP status code if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
