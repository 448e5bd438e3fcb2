//! Library value types: songs, playlists, users.
//!
//! A playlist is shared, not exclusively owned. A User and a MusicPlayer
//! alias the same list through SharedPlaylist, so songs appended after a
//! player was built are visible to it.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::models::media::Format;

/// An immutable song: display title plus the path the backend receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    title: String,
    file_path: String,
}

impl Song {
    pub fn new(title: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file_path: file_path.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Format classification of this song's file path.
    pub fn format(&self) -> Format {
        Format::from_path(&self.file_path)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.file_path)
    }
}

/// Handle that lets several owners observe the same playlist mutations.
pub type SharedPlaylist = Arc<Mutex<Playlist>>;

/// Named ordered collection of songs. Insertion order is playback order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    /// Wrap into the shared handle players and users hold.
    pub fn into_shared(self) -> SharedPlaylist {
        Arc::new(Mutex::new(self))
    }

    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Remove the first structurally-equal match. Absent songs are a no-op.
    pub fn remove_song(&mut self, song: &Song) {
        if let Some(pos) = self.songs.iter().position(|s| s == song) {
            self.songs.remove(pos);
        }
    }

    /// Shuffle stub; ordering is left unchanged.
    pub fn shuffle(&mut self) {}

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// A named account owning shared playlists. Duplicates are allowed.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    email: String,
    playlists: Vec<SharedPlaylist>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            playlists: Vec::new(),
        }
    }

    pub fn add_playlist(&mut self, playlist: SharedPlaylist) {
        self.playlists.push(playlist);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn playlists(&self) -> &[SharedPlaylist] {
        &self.playlists
    }
}
