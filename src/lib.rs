//! Channel catalog generator
//!
//! Downloads an M3U playlist of live channels, classifies every channel into a
//! category, flags a curated featured subset and publishes the result as JSON
//! documents for display clients.

pub mod config;
pub mod errors;
pub mod ingestor;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod sources;
pub mod utils;
