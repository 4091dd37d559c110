//! Catalog generation pipeline
//!
//! ```text
//! playlist text -> M3uParser -> RawEntry*
//!     -> extractors (quality, language, id)
//!     -> CategoryClassifier
//!     -> FeaturedSelector
//!     -> DatasetAssembler -> Dataset
//! ```
//!
//! Every curated table is taken from [`crate::config::CatalogConfig`] at
//! construction time.

pub mod assembler;
pub mod classifier;
pub mod extractors;
pub mod featured;
pub mod orchestrator;

pub use assembler::{DatasetAssembler, DatasetSummary, find_id_collisions};
pub use classifier::{CategoryClassifier, Classification};
pub use extractors::{LanguageDetector, create_channel_id, extract_quality};
pub use featured::FeaturedSelector;
pub use orchestrator::{CatalogPipeline, PipelineOutput};
