//! Error types for the pixels application.
//!
//! Errors are split by concern and composed with `thiserror`:
//!
//! - [`AppError`] - top-level failures that end the program
//! - [`FetchError`] - search request failures (non-fatal, logged)
//! - [`PlatformError`] - download / clipboard failures (non-fatal, logged)
//!
//! # Recovery Strategy
//!
//! Nothing in the browsing flow is fatal. A failed search or page fetch
//! leaves the result set untouched and is only written to the log; a failed
//! download or share resets the detail view to idle without a toast.
//! Configuration, logging setup and terminal I/O failures are fatal and
//! propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// No API key in config, environment or CLI flags.
    #[error("No API key configured (set api_key in config, PIXELS_API_KEY, or --api-key)")]
    MissingApiKey,

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of a single search request.
///
/// Every variant is terminal for that request only: the caller logs it and
/// leaves its state unchanged. No retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body (the API puts its error message here).
        body: String,
    },

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The body was not valid JSON.
    #[error("Malformed JSON response: {0}")]
    Json(String),
}

/// Failure of a platform service (download, clipboard).
#[derive(Debug, Error)]
pub enum PlatformError {
    /// HTTP request for the file failed.
    #[error("Download request for {url} failed: {reason}")]
    Request {
        /// Source URL.
        url: String,
        /// Failure description.
        reason: String,
    },

    /// Writing the downloaded file failed.
    #[error("Failed to write {path:?}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The system clipboard is unavailable or rejected the write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
