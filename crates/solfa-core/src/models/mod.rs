//! Solfa data models.
//!
//! Types exist where Rust type safety genuinely helps: value structs for
//! the library, a string enum for format classification, a snapshot
//! struct for playback state.

pub mod library;
pub mod media;
pub mod playback;

pub use library::{Playlist, SharedPlaylist, Song, User};
pub use media::Format;
pub use playback::PlaybackState;
