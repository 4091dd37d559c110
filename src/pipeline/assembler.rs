//! Dataset assembly from classified channels

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::config::{CatalogConfig, CategoryRule};
use crate::ingestor::ParseStats;
use crate::models::{Category, Channel, Dataset};

/// Builds the final [`Dataset`] from channels in parse order
#[derive(Debug, Clone)]
pub struct DatasetAssembler {
    definitions: Vec<Category>,
    version: String,
}

impl DatasetAssembler {
    pub fn new(rules: &[CategoryRule], version: &str) -> Self {
        Self {
            definitions: rules
                .iter()
                .map(|rule| Category {
                    id: rule.id.clone(),
                    name: rule.name.clone(),
                    icon: rule.icon.clone(),
                    order: rule.order,
                })
                .collect(),
            version: version.to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig, version: &str) -> Self {
        Self::new(&config.categories, version)
    }

    /// Assemble a dataset stamped with `generated_on`
    ///
    /// Only categories referenced by at least one channel are published,
    /// sorted by their display order.
    pub fn assemble(&self, channels: Vec<Channel>, generated_on: NaiveDate) -> Dataset {
        let mut categories: Vec<Category> = self
            .definitions
            .iter()
            .filter(|definition| channels.iter().any(|c| c.category_id == definition.id))
            .cloned()
            .collect();
        categories.sort_by_key(|category| category.order);

        let featured = channels
            .iter()
            .filter(|channel| channel.is_featured)
            .map(|channel| channel.id.clone())
            .collect();

        Dataset {
            version: self.version.clone(),
            last_updated: generated_on,
            categories,
            channels,
            featured,
        }
    }
}

/// Post-run statistics for operators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub total_channels: usize,
    pub featured_channels: usize,
    /// (category name, channel count) in category order
    pub category_counts: Vec<(String, usize)>,
    /// Ids shared by more than one channel, with how many share each
    pub id_collisions: Vec<(String, usize)>,
    pub parse: ParseStats,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset, parse: ParseStats) -> Self {
        let category_counts = dataset
            .categories
            .iter()
            .map(|category| {
                let count = dataset
                    .channels
                    .iter()
                    .filter(|c| c.category_id == category.id)
                    .count();
                (category.name.clone(), count)
            })
            .collect();

        Self {
            total_channels: dataset.channels.len(),
            featured_channels: dataset.featured.len(),
            category_counts,
            id_collisions: find_id_collisions(&dataset.channels),
            parse,
        }
    }

    pub fn log(&self) {
        info!(
            "Generated {} channels ({} featured) in {} categories",
            self.total_channels,
            self.featured_channels,
            self.category_counts.len()
        );
        info!(
            "Categories: {}",
            self.category_counts
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        for (name, count) in &self.category_counts {
            info!("  {}: {}", name, count);
        }
        if self.parse.skipped() > 0 {
            info!(
                "Skipped {} playlist entries ({} without name, {} invalid URL, {} truncated)",
                self.parse.skipped(),
                self.parse.missing_name,
                self.parse.invalid_url,
                self.parse.truncated
            );
        }
        for (id, count) in &self.id_collisions {
            warn!("Channel id '{}' is shared by {} channels", id, count);
        }
    }
}

/// Ids used by more than one channel, in order of first appearance
pub fn find_id_collisions(channels: &[Channel]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for channel in channels {
        *counts.entry(channel.id.as_str()).or_default() += 1;
    }

    let mut collisions: Vec<(String, usize)> = Vec::new();
    for channel in channels {
        let count = counts[channel.id.as_str()];
        if count > 1 && !collisions.iter().any(|(id, _)| id == &channel.id) {
            collisions.push((channel.id.clone(), count));
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, category_id: &str, is_featured: bool) -> Channel {
        Channel {
            id: id.to_string(),
            name: id.to_string(),
            category_id: category_id.to_string(),
            stream_url: format!("http://example.com/{id}"),
            quality: None,
            tvg_id: None,
            logo: None,
            language: Some("Hindi".to_string()),
            is_featured,
            is_active: true,
            requires_auth: false,
            geo_blocked: false,
            is_24x7: true,
            http_referrer: None,
            user_agent: None,
            display_order: if is_featured { 1 } else { 2 },
        }
    }

    fn assembler() -> DatasetAssembler {
        DatasetAssembler::from_config(&CatalogConfig::default(), "1.0.0")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_only_observed_categories_sorted_by_order() {
        let dataset = assembler().assemble(
            vec![
                channel("star-sports", "sports", false),
                channel("aaj-tak", "news", true),
                channel("sony-max", "movies", false),
            ],
            today(),
        );

        let ids: Vec<&str> = dataset.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["news", "movies", "sports"]);
        assert_eq!(dataset.categories[0].icon, "newspaper");
    }

    #[test]
    fn test_channels_keep_parse_order_and_featured_follows_it() {
        let dataset = assembler().assemble(
            vec![
                channel("b", "news", true),
                channel("a", "news", false),
                channel("c", "music", true),
            ],
            today(),
        );

        let ids: Vec<&str> = dataset.channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(dataset.featured, vec!["b", "c"]);
        assert_eq!(dataset.version, "1.0.0");
        assert_eq!(dataset.last_updated, today());
    }

    #[test]
    fn test_empty_input_yields_empty_dataset() {
        let dataset = assembler().assemble(vec![], today());
        assert!(dataset.categories.is_empty());
        assert!(dataset.channels.is_empty());
        assert!(dataset.featured.is_empty());
    }

    #[test]
    fn test_summary_counts_and_collisions() {
        let dataset = assembler().assemble(
            vec![
                channel("zee-tv", "entertainment", true),
                channel("zee-tv", "entertainment", false),
                channel("ndtv", "news", false),
            ],
            today(),
        );
        let summary = DatasetSummary::from_dataset(&dataset, ParseStats::default());

        assert_eq!(summary.total_channels, 3);
        assert_eq!(summary.featured_channels, 1);
        assert_eq!(
            summary.category_counts,
            vec![("News".to_string(), 1), ("Entertainment".to_string(), 2)]
        );
        assert_eq!(summary.id_collisions, vec![("zee-tv".to_string(), 2)]);
    }
}
