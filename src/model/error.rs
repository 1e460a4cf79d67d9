//! Error types for idxview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from start-up and the terminal layer
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup failures
//!   - [`ApiError`] - building the HTTP client (invalid base URL)
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery Strategy
//!
//! [`ApiError`] is also what every indexer request returns, but request
//! failures are **never fatal**: the fetch layer logs them and substitutes an
//! empty list or an absent page, so the UI keeps rendering an empty state.
//! Only start-up and terminal errors reach `main`.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Indexer client could not be constructed.
    #[error("Indexer API error: {0}")]
    Api(#[from] ApiError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure talking to the indexer API.
///
/// Variants carry strings rather than transport error values so the type stays
/// `Clone` and can travel through the fetch channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The configured server URL cannot be used as a base for API paths.
    #[error("Invalid server URL: {0}")]
    InvalidBaseUrl(String),

    /// Network-level failure (connection refused, timeout, TLS...).
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying error message.
        reason: String,
    },

    /// Server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Response body did not match the expected JSON shape.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder message.
        reason: String,
    },
}
