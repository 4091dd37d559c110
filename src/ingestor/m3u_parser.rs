//! Extended M3U playlist parser
//!
//! Turns playlist text into [`RawEntry`] records. Entries are pairs of an
//! `#EXTINF` metadata line and the stream URL line right after it:
//!
//! ```text
//! #EXTM3U
//! #EXTINF:-1 tvg-id="StarSports1.in" tvg-logo="https://logo.example/ss1.png",Star Sports 1 HD
//! http://example.com/stream.m3u8
//! ```
//!
//! Malformed entries never fail the parse; they are skipped and counted in
//! [`ParseStats`].

use std::collections::HashMap;
use tracing::{debug, info};

use crate::models::RawEntry;

const EXTINF_PREFIX: &str = "#EXTINF:";
const NETWORK_SCHEME_PREFIX: &str = "http";

/// Counters describing what the parser accepted and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-empty lines seen
    pub lines: usize,
    pub accepted: usize,
    /// Metadata lines without a comma or with an empty name
    pub missing_name: usize,
    /// Metadata lines whose next line is not a network URL
    pub invalid_url: usize,
    /// Metadata line as the last line of the input
    pub truncated: usize,
}

impl ParseStats {
    pub fn skipped(&self) -> usize {
        self.missing_name + self.invalid_url + self.truncated
    }
}

/// Entries in source order plus parse counters
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub entries: Vec<RawEntry>,
    pub stats: ParseStats,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct M3uParser;

impl M3uParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse playlist text into raw entries
    pub fn parse(&self, content: &str) -> ParseOutcome {
        let lines: Vec<&str> = content
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut outcome = ParseOutcome::default();
        outcome.stats.lines = lines.len();

        debug!("Parsing playlist with {} non-empty lines", lines.len());

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            i += 1;

            if !line.starts_with(EXTINF_PREFIX) {
                continue;
            }

            let Some((attributes_part, name)) = split_extinf(line) else {
                debug!("Skipping metadata line without a usable name: {}", line);
                outcome.stats.missing_name += 1;
                continue;
            };

            let Some(url) = lines.get(i) else {
                debug!("Dropping metadata line at end of input for '{}'", name);
                outcome.stats.truncated += 1;
                continue;
            };

            if !url.starts_with(NETWORK_SCHEME_PREFIX) {
                // The candidate line is re-examined on the next iteration so a
                // following metadata line still starts its own entry.
                debug!("Skipping '{}': '{}' is not a network URL", name, url);
                outcome.stats.invalid_url += 1;
                continue;
            }

            outcome.entries.push(RawEntry {
                name: name.to_string(),
                stream_url: url.to_string(),
                raw_info_line: line.to_string(),
                attributes: parse_extinf_attributes(attributes_part),
            });
            i += 1; // URL line consumed
        }

        outcome.stats.accepted = outcome.entries.len();

        info!(
            "Playlist parsing completed: {} entries accepted, {} skipped",
            outcome.stats.accepted,
            outcome.stats.skipped()
        );

        outcome
    }
}

/// Split `#EXTINF:<duration> <attrs>,<name>` at its last comma
///
/// Returns `None` when there is no comma or the name is blank.
fn split_extinf(line: &str) -> Option<(&str, &str)> {
    let content = line.strip_prefix(EXTINF_PREFIX).unwrap_or(line);
    let comma_pos = content.rfind(',')?;
    let name = content[comma_pos + 1..].trim();
    if name.is_empty() {
        return None;
    }
    Some((&content[..comma_pos], name))
}

/// Parse `key="value"` pairs (and bare `key=value`) from the attribute part
fn parse_extinf_attributes(attrs_part: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();

    let mut chars = attrs_part.chars().peekable();
    let mut current_key = String::new();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut in_value = false;

    while let Some(ch) = chars.next() {
        match ch {
            ' ' | '\t' if !in_quotes => {
                if in_value && !current_key.is_empty() {
                    attributes.insert(current_key.clone(), current_value.clone());
                }
                // Anything before whitespace that never saw '=' (the duration) is dropped
                current_key.clear();
                current_value.clear();
                in_value = false;
            }
            '=' if !in_value => {
                in_value = true;
                if chars.peek() == Some(&'"') {
                    chars.next();
                    in_quotes = true;
                }
            }
            '"' if in_quotes => {
                in_quotes = false;
                if !current_key.is_empty() {
                    attributes.insert(current_key.clone(), current_value.clone());
                }
                current_key.clear();
                current_value.clear();
                in_value = false;
            }
            _ => {
                if in_value {
                    current_value.push(ch);
                } else {
                    current_key.push(ch);
                }
            }
        }
    }

    // Trailing unquoted value
    if in_value && !in_quotes && !current_key.is_empty() {
        attributes.insert(current_key, current_value);
    }

    attributes
}
