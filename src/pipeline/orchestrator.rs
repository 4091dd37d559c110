//! End-to-end catalog generation: fetch, parse, derive, assemble

use chrono::NaiveDate;
use tracing::{debug, info};

use super::assembler::{DatasetAssembler, DatasetSummary};
use super::classifier::CategoryClassifier;
use super::extractors::{LanguageDetector, create_channel_id, extract_quality};
use super::featured::FeaturedSelector;
use crate::config::{CatalogConfig, Config};
use crate::errors::AppResult;
use crate::ingestor::M3uParser;
use crate::models::{Channel, Dataset, RawEntry};
use crate::sources::PlaylistSource;
use crate::utils::url::UrlUtils;

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub dataset: Dataset,
    pub summary: DatasetSummary,
}

/// Sequential catalog pipeline built from the curated tables
#[derive(Debug, Clone)]
pub struct CatalogPipeline {
    parser: M3uParser,
    classifier: CategoryClassifier,
    featured: FeaturedSelector,
    languages: LanguageDetector,
    assembler: DatasetAssembler,
    featured_display_order: i32,
    standard_display_order: i32,
    max_id_length: usize,
}

impl CatalogPipeline {
    pub fn new(catalog: &CatalogConfig, version: &str) -> Self {
        Self {
            parser: M3uParser::new(),
            classifier: CategoryClassifier::from_config(catalog),
            featured: FeaturedSelector::from_config(catalog),
            languages: LanguageDetector::new(&catalog.languages),
            assembler: DatasetAssembler::from_config(catalog, version),
            featured_display_order: catalog.featured_display_order,
            standard_display_order: catalog.standard_display_order,
            max_id_length: catalog.max_id_length,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.catalog, &config.output.version)
    }

    /// Fetch the playlist and build the dataset
    ///
    /// A fetch failure is returned before anything is assembled.
    pub async fn run(
        &self,
        source: &dyn PlaylistSource,
        generated_on: NaiveDate,
    ) -> AppResult<PipelineOutput> {
        info!(
            "Downloading playlist from: {}",
            UrlUtils::obfuscate_credentials(source.location())
        );
        let content = source.fetch_playlist().await?;
        info!("Fetched {} bytes of playlist content", content.len());

        Ok(self.process(&content, generated_on))
    }

    /// Build the dataset from playlist text
    pub fn process(&self, content: &str, generated_on: NaiveDate) -> PipelineOutput {
        let outcome = self.parser.parse(content);

        let channels: Vec<Channel> = outcome
            .entries
            .iter()
            .map(|entry| self.build_channel(entry))
            .collect();

        let dataset = self.assembler.assemble(channels, generated_on);
        let summary = DatasetSummary::from_dataset(&dataset, outcome.stats);

        PipelineOutput { dataset, summary }
    }

    /// Derive the output record for one entry
    pub fn build_channel(&self, entry: &RawEntry) -> Channel {
        let classification = self.classifier.classify_with_match(&entry.name);
        let is_featured = self.featured.is_featured(&entry.name);

        debug!(
            "Classified '{}' as '{}' (pattern: {:?}, featured: {})",
            entry.name, classification.category_id, classification.matched_pattern, is_featured
        );

        Channel {
            id: create_channel_id(&entry.name, self.max_id_length),
            name: entry.name.clone(),
            category_id: classification.category_id.to_string(),
            stream_url: entry.stream_url.clone(),
            quality: extract_quality(&entry.raw_info_line),
            tvg_id: entry.tvg_id().map(str::to_string),
            logo: entry.tvg_logo().map(str::to_string),
            language: self.languages.detect(&entry.name),
            is_featured,
            is_active: true,
            requires_auth: false,
            geo_blocked: false,
            is_24x7: true,
            http_referrer: None,
            user_agent: None,
            display_order: if is_featured {
                self.featured_display_order
            } else {
                self.standard_display_order
            },
        }
    }
}
