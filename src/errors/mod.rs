//! Centralized error handling for the channel catalog generator
//!
//! Only run-level failures surface as errors. Entry-level problems found while
//! parsing a playlist are recovered locally by the parser and never reach this
//! module.
//!
//! # Error Categories
//!
//! - **Source Errors**: fetching the playlist (HTTP status, transport, local file)
//! - **Configuration Errors**: unreadable or inconsistent catalog rules
//! - **Output Errors**: writing the generated documents
//!
//! # Usage
//!
//! ```rust
//! use channel_catalog::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("catalog.categories must not be empty"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
