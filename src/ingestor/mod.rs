//! Playlist ingestion: turning fetched playlist text into raw entries

pub mod m3u_parser;

pub use m3u_parser::{M3uParser, ParseOutcome, ParseStats};
