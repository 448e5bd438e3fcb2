//! Playback state snapshot.

use serde::{Deserialize, Serialize};

use crate::models::library::Song;

/// Point-in-time view of a player, for display and diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    pub current: Option<Song>,
    pub index: usize,
    pub playing: bool,
    pub repeat: bool,
}
