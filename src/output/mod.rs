//! Publishing the generated dataset to disk

pub mod writer;

pub use writer::{DatasetWriter, WriteReport};
