//! Lenient playlist text decoding

use tracing::warn;

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD
///
/// Replacements are logged as a warning, never returned as an error.
pub fn decode_lossy(bytes: &[u8], origin: &str) -> String {
    match String::from_utf8_lossy(bytes) {
        std::borrow::Cow::Borrowed(text) => text.to_string(),
        std::borrow::Cow::Owned(text) => {
            let replaced = text.chars().filter(|&ch| ch == '\u{FFFD}').count();
            warn!(
                "Playlist from {} is not valid UTF-8, inserted {} replacement characters",
                origin, replaced
            );
            text
        }
    }
}
