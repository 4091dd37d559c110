use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::language_id;

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the playlist comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `http(s)://` URL, `file://` URL or a local path
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_connect_timeout", with = "duration_serde::duration")]
    pub connect_timeout: Duration,
    #[serde(default = "default_request_timeout", with = "duration_serde::duration")]
    pub request_timeout: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Where and how the generated documents are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Combined document path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Root directory of the per-language layout
    #[serde(default = "default_split_dir")]
    pub split_dir: PathBuf,
    #[serde(default)]
    pub layout: OutputLayout,
    #[serde(default = "default_dataset_version")]
    pub version: String,
    #[serde(default = "default_pretty_output")]
    pub pretty: bool,
}

/// Shape of the published output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// One document holding the whole dataset
    #[default]
    Combined,
    /// Language directory plus one dataset and one player document per channel
    PerLanguage,
    Both,
}

impl OutputLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLayout::Combined => "combined",
            OutputLayout::PerLanguage => "per_language",
            OutputLayout::Both => "both",
        }
    }

    pub fn writes_combined(&self) -> bool {
        matches!(self, OutputLayout::Combined | OutputLayout::Both)
    }

    pub fn writes_per_language(&self) -> bool {
        matches!(self, OutputLayout::PerLanguage | OutputLayout::Both)
    }
}

impl FromStr for OutputLayout {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "combined" => Ok(OutputLayout::Combined),
            "per_language" | "per-language" => Ok(OutputLayout::PerLanguage),
            "both" => Ok(OutputLayout::Both),
            other => Err(AppError::configuration(format!(
                "Unknown output layout '{other}' (expected combined, per_language or both)"
            ))),
        }
    }
}

/// Curated tables driving classification, language detection and featuring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Category assigned when no rule matches
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_featured_display_order")]
    pub featured_display_order: i32,
    #[serde(default = "default_standard_display_order")]
    pub standard_display_order: i32,
    #[serde(default = "default_max_id_length")]
    pub max_id_length: usize,
    /// Reference names for the featured selector
    #[serde(default = "default_featured")]
    pub featured: Vec<String>,
    /// Known languages, first entry is the fallback
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Closed category set; declaration order is classification priority
    #[serde(default = "default_category_rules")]
    pub categories: Vec<CategoryRule>,
}

/// One category with its display metadata and keyword patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub order: i32,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl CategoryRule {
    pub fn new(id: &str, name: &str, icon: &str, order: i32, patterns: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            order,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_connect_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_CONNECT_TIMEOUT).unwrap_or(Duration::from_secs(10))
}

fn default_request_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_REQUEST_TIMEOUT).unwrap_or(Duration::from_secs(60))
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_split_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SPLIT_DIR)
}

fn default_dataset_version() -> String {
    DEFAULT_DATASET_VERSION.to_string()
}

fn default_pretty_output() -> bool {
    DEFAULT_PRETTY_OUTPUT
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_featured_display_order() -> i32 {
    DEFAULT_FEATURED_DISPLAY_ORDER
}

fn default_standard_display_order() -> i32 {
    DEFAULT_STANDARD_DISPLAY_ORDER
}

fn default_max_id_length() -> usize {
    DEFAULT_MAX_ID_LENGTH
}

fn default_featured() -> Vec<String> {
    DEFAULT_FEATURED_CHANNELS.iter().map(|s| s.to_string()).collect()
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            user_agent: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            split_dir: default_split_dir(),
            layout: OutputLayout::default(),
            version: default_dataset_version(),
            pretty: default_pretty_output(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            featured_display_order: default_featured_display_order(),
            standard_display_order: default_standard_display_order(),
            max_id_length: default_max_id_length(),
            featured: default_featured(),
            languages: default_languages(),
            categories: default_category_rules(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Reject tables the pipeline cannot honour
    pub fn validate(&self) -> AppResult<()> {
        if self.categories.is_empty() {
            return Err(AppError::configuration("catalog.categories must not be empty"));
        }

        let mut seen = HashSet::new();
        for rule in &self.categories {
            if rule.id.trim().is_empty() {
                return Err(AppError::configuration(format!(
                    "Category '{}' has an empty id",
                    rule.name
                )));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(AppError::configuration(format!(
                    "Duplicate category id '{}'",
                    rule.id
                )));
            }
            if rule.patterns.iter().any(|p| p.is_empty()) {
                return Err(AppError::configuration(format!(
                    "Category '{}' has an empty pattern",
                    rule.id
                )));
            }
        }

        if !seen.contains(self.default_category.as_str()) {
            return Err(AppError::configuration(format!(
                "Default category '{}' is not declared in catalog.categories",
                self.default_category
            )));
        }

        if self.languages.is_empty() {
            return Err(AppError::configuration("catalog.languages must not be empty"));
        }
        for language in &self.languages {
            // Language ids name directories of the per-language layout
            let id = language_id(language);
            if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
                return Err(AppError::configuration(format!(
                    "Language '{language}' cannot be used as a directory name"
                )));
            }
        }

        if self.featured_display_order >= self.standard_display_order {
            return Err(AppError::configuration(format!(
                "catalog.featured_display_order ({}) must be lower than catalog.standard_display_order ({})",
                self.featured_display_order, self.standard_display_order
            )));
        }

        if self.max_id_length == 0 {
            return Err(AppError::configuration("catalog.max_id_length must be positive"));
        }

        Ok(())
    }
}

impl Config {
    /// Read the config file, writing the defaults there first if it is missing
    pub fn load_from_file(config_file: &str) -> AppResult<Self> {
        let config = if Path::new(config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Self::from_toml(&contents)?
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config).map_err(|e| {
                AppError::configuration(format!("Failed to render default config: {e}"))
            })?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            default_config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents)
            .map_err(|e| AppError::configuration(format!("Invalid config file: {e}")))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.source.url.trim().is_empty() {
            return Err(AppError::configuration("source.url must not be empty"));
        }
        if self.output.version.trim().is_empty() {
            return Err(AppError::configuration("output.version must not be empty"));
        }
        self.catalog.validate()
    }
}
