//! Dataset document writer
//!
//! Two layouts are supported:
//!
//! ```text
//! combined:       <output.path>                      full dataset
//! per_language:   <split_dir>/_meta.json             language directory
//!                 <split_dir>/<lang>/_meta.json      dataset for one language
//!                 <split_dir>/<lang>/<id>.json       player details per channel
//! ```
//!
//! Every document is rendered before the first byte is written, and each file
//! is replaced atomically, so a failed run leaves the previous output intact.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::OutputConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, LanguageDirectory, LanguageEntry, PlayerDetails};

const META_FILE_NAME: &str = "_meta.json";

/// Files produced by one write
#[derive(Debug, Clone, Default)]
pub struct WriteReport {
    pub files_written: Vec<PathBuf>,
}

pub struct DatasetWriter {
    config: OutputConfig,
}

impl DatasetWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render and write every document of the configured layout
    pub fn write(&self, dataset: &Dataset) -> AppResult<WriteReport> {
        let mut documents: Vec<(PathBuf, Vec<u8>)> = Vec::new();

        if self.config.layout.writes_combined() {
            documents.push((self.config.path.clone(), self.render(dataset)?));
        }
        if self.config.layout.writes_per_language() {
            documents.extend(self.render_per_language(dataset)?);
        }

        info!(
            "Writing {} document(s) using the '{}' layout",
            documents.len(),
            self.config.layout.as_str()
        );

        let mut report = WriteReport::default();
        for (path, bytes) in documents {
            write_atomic(&path, &bytes)?;
            debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
            report.files_written.push(path);
        }

        Ok(report)
    }

    fn render_per_language(&self, dataset: &Dataset) -> AppResult<Vec<(PathBuf, Vec<u8>)>> {
        let root = &self.config.split_dir;
        let mut documents = Vec::new();
        let mut languages = Vec::new();

        for id in dataset.language_ids() {
            let subset = dataset.for_language(&id);
            let name = subset
                .channels
                .iter()
                .find_map(|channel| channel.language.clone())
                .unwrap_or_else(|| id.clone());

            let language_dir = root.join(&id);
            documents.push((language_dir.join(META_FILE_NAME), self.render(&subset)?));

            for channel in &subset.channels {
                if channel.id.is_empty() {
                    warn!("Skipping player document for '{}': empty channel id", channel.name);
                    continue;
                }
                let details = PlayerDetails::from(channel);
                documents.push((
                    language_dir.join(format!("{}.json", channel.id)),
                    self.render(&details)?,
                ));
            }

            languages.push(LanguageEntry {
                id,
                name,
                channel_count: subset.channels.len(),
            });
        }

        let directory = LanguageDirectory {
            version: dataset.version.clone(),
            last_updated: dataset.last_updated,
            categories: dataset.categories.clone(),
            languages,
        };
        documents.push((root.join(META_FILE_NAME), self.render(&directory)?));

        Ok(documents)
    }

    fn render<T: Serialize>(&self, value: &T) -> AppResult<Vec<u8>> {
        let mut bytes = if self.config.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Write through a temporary file in the target directory, then rename
fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(&parent)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(path)
        .map_err(|e| AppError::output(path.display().to_string(), e.error.to_string()))?;

    Ok(())
}
