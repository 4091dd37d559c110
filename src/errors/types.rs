//! Error type definitions for the channel catalog generator

use thiserror::Error;

/// Top-level application error type
///
/// Every variant is fatal to a run: the binary reports it and exits with a
/// non-zero status without writing any output.
#[derive(Error, Debug)]
pub enum AppError {
    /// Playlist source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output document errors
    #[error("Output error: {path} - {message}")]
    Output { path: String, message: String },

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Playlist source specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// Non-success HTTP response from the playlist host
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Transport failure (DNS, connect, TLS, timeout)
    #[error("Source unreachable: {url} - {message}")]
    Unreachable { url: String, message: String },

    /// Source location that can be neither fetched nor read
    #[error("Invalid source location: {location} - {message}")]
    InvalidLocation { location: String, message: String },

    /// HTTP client could not be built from the source settings
    #[error("HTTP client setup failed: {message}")]
    ClientSetup { message: String },
}

impl AppError {
    /// Create a configuration error with a custom message
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output error for a specific path
    pub fn output<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create an HTTP status error
    pub fn http<M: Into<String>>(status: u16, message: M) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn unreachable<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Unreachable {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an invalid location error
    pub fn invalid_location<L: Into<String>, M: Into<String>>(location: L, message: M) -> Self {
        Self::InvalidLocation {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a client setup error
    pub fn client_setup<M: Into<String>>(message: M) -> Self {
        Self::ClientSetup {
            message: message.into(),
        }
    }
}
