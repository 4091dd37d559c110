//! Attribute extraction from a parsed entry: quality, language and channel id

use regex::Regex;
use std::sync::LazyLock;

static QUALITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)([0-9]+p)(?-u:\b)").expect("quality pattern is valid")
});

/// First ASCII `<digits>p` token on the metadata line, verbatim
pub fn extract_quality(info_line: &str) -> Option<String> {
    QUALITY_REGEX
        .captures(info_line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Derive a slug id from a channel name
///
/// Lowercases the name, keeps ASCII letters and digits, drops every other
/// character, and joins the words (split on whitespace or hyphens) with single
/// hyphens. The result is capped at `max_len` characters without a dangling
/// hyphen, so deriving an id from an id returns it unchanged.
///
/// Distinct names may produce the same id; callers get no collision guarantee.
pub fn create_channel_id(name: &str, max_len: usize) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            current.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut id = words.join("-");
    // ASCII only at this point, byte truncation is char truncation
    id.truncate(max_len);
    id.trim_end_matches('-').to_string()
}

/// Finds the first configured language mentioned in a channel name
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    /// (display name, lowercased name) in priority order
    languages: Vec<(String, String)>,
}

impl LanguageDetector {
    pub fn new(languages: &[String]) -> Self {
        Self {
            languages: languages
                .iter()
                .map(|lang| (lang.clone(), lang.to_lowercase()))
                .collect(),
        }
    }

    /// Language for a channel name
    ///
    /// List order decides ties, not the position in the name. Names without a
    /// known language get the first list entry.
    pub fn detect(&self, name: &str) -> Option<String> {
        let lower = name.to_lowercase();
        self.languages
            .iter()
            .find(|(_, needle)| lower.contains(needle.as_str()))
            .or_else(|| self.languages.first())
            .map(|(display, _)| display.clone())
    }

    pub fn fallback(&self) -> Option<&str> {
        self.languages.first().map(|(display, _)| display.as_str())
    }
}
