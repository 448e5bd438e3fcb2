//! Platform backend variants.
//!
//! Each variant only prints the action it would take; the real OS audio
//! call sites live behind these methods in a full integration.

use super::AudioBackend;

/// Simulated Windows playback.
pub struct WindowsBackend;

impl AudioBackend for WindowsBackend {
    fn play_audio(&self, file_path: &str) {
        println!("Playing audio on Windows: {}", file_path);
    }

    fn pause_audio(&self) {
        println!("Pausing audio on Windows");
    }
}

/// Simulated Linux playback.
pub struct LinuxBackend;

impl AudioBackend for LinuxBackend {
    fn play_audio(&self, file_path: &str) {
        println!("Playing audio on Linux: {}", file_path);
    }

    fn pause_audio(&self) {
        println!("Pausing audio on Linux");
    }
}
