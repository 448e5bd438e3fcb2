//! The player abstraction: the other side of the bridge.
//!
//! MusicPlayer owns the playback state machine and delegates the actual
//! audio action to whatever AudioBackend it was built with. Swapping the
//! backend swaps the observable behavior; the player logic never changes.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::backend::AudioBackend;
use crate::error::PlayerError;
use crate::models::library::{SharedPlaylist, Song};
use crate::models::playback::PlaybackState;

/// Playback orchestrator over a shared playlist and a platform backend.
pub struct MusicPlayer {
    current: Option<Song>,
    playlist: SharedPlaylist,
    index: usize,
    playing: bool,
    repeat: bool,
    backend: Arc<dyn AudioBackend>,
}

impl MusicPlayer {
    pub fn new(playlist: SharedPlaylist, backend: Arc<dyn AudioBackend>) -> Self {
        Self {
            current: None,
            playlist,
            index: 0,
            playing: false,
            repeat: false,
            backend,
        }
    }

    /// Play the song at the current index. Empty playlist: silent no-op.
    ///
    /// An index left beyond the end by a shrunken playlist is absorbed
    /// the same way.
    pub fn play(&mut self) {
        let song = {
            let playlist = self.playlist.lock();
            match playlist.songs().get(self.index) {
                Some(song) => song.clone(),
                None => return,
            }
        };
        log::debug!("solfa: play index {}: {}", self.index, song);
        self.start(song);
    }

    /// Play an arbitrary song, bypassing the playlist.
    ///
    /// The current index is deliberately left untouched, so a song that
    /// is not at the index desyncs `current_song` from the playlist
    /// position. Unsupported formats are warned about but still handed
    /// to the backend unchanged.
    pub fn play_song(&mut self, song: &Song) {
        if !song.format().is_supported() {
            log::warn!(
                "solfa: format {} is not on the supported list, playing {} anyway",
                song.format(),
                song.file_path(),
            );
        }
        self.start(song.clone());
    }

    /// Pause when playing; otherwise a silent no-op.
    pub fn pause(&mut self) {
        if self.playing {
            self.backend.pause_audio();
            self.playing = false;
        }
    }

    /// Advance to the next song with wraparound, then play.
    pub fn next(&mut self) {
        let len = self.playlist.lock().len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.play();
    }

    /// Step back to the previous song with wraparound, then play.
    pub fn previous(&mut self) {
        let len = self.playlist.lock().len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
        self.play();
    }

    /// Flip the repeat flag. Stored only; nothing consumes it.
    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    /// Advisory format check. No play path consults this; the demo uses
    /// it to narrate the unsupported-format gap without rejecting input.
    pub fn check_format(&self, song: &Song) -> Result<(), PlayerError> {
        let format = song.format();
        if format.is_supported() {
            Ok(())
        } else {
            Err(PlayerError::UnsupportedFormat {
                format,
                path: song.file_path().to_string(),
            })
        }
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Snapshot for display and diagnostics.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current: self.current.clone(),
            index: self.index,
            playing: self.playing,
            repeat: self.repeat,
        }
    }

    /// Playlist handle for extensions of the player.
    pub(crate) fn playlist(&self) -> &SharedPlaylist {
        &self.playlist
    }

    fn start(&mut self, song: Song) {
        self.backend.play_audio(song.file_path());
        self.current = Some(song);
        self.playing = true;
    }
}

/// MusicPlayer plus the refined controls of the extended demo.
///
/// Composition stands in for the original subclass; Deref keeps the base
/// operations available unchanged.
pub struct RefinedMusicPlayer {
    inner: MusicPlayer,
}

impl RefinedMusicPlayer {
    pub fn new(playlist: SharedPlaylist, backend: Arc<dyn AudioBackend>) -> Self {
        Self {
            inner: MusicPlayer::new(playlist, backend),
        }
    }

    /// Delegate to the playlist shuffle stub and confirm.
    pub fn shuffle(&mut self) {
        self.inner.playlist().lock().shuffle();
        println!("Playlist shuffled.");
    }

    /// Print-only seek; a real integration would forward to the backend.
    pub fn seek(&mut self, seconds: u32) {
        println!("Seeking to {} seconds.", seconds);
    }

    /// Print-only speed control.
    pub fn set_playback_speed(&mut self, speed: f64) {
        println!("Setting playback speed to {}x.", speed);
    }
}

impl Deref for RefinedMusicPlayer {
    type Target = MusicPlayer;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RefinedMusicPlayer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
