//! Playlist sources
//!
//! A [`PlaylistSource`] yields the raw playlist text for one run. The
//! [`PlaylistSourceFactory`] picks HTTP or local file access from the
//! configured location.

pub mod factory;
pub mod m3u;
pub mod traits;

pub use factory::PlaylistSourceFactory;
pub use m3u::{FilePlaylistSource, HttpPlaylistSource};
pub use traits::PlaylistSource;
