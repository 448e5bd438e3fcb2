//! Audio backends: the implementation side of the player bridge.
//!
//! The player delegates through `dyn AudioBackend`, so platform variants
//! can be added or swapped at runtime without touching player code.
//! All methods take `&self`; backends here are stateless.

use std::sync::Arc;

pub mod platform;

pub use platform::{LinuxBackend, WindowsBackend};

/// Platform playback capability the player delegates to.
pub trait AudioBackend: Send + Sync {
    /// Begin (simulated) playback of the file at `file_path`.
    fn play_audio(&self, file_path: &str);

    /// Pause whatever is playing.
    fn pause_audio(&self);
}

/// Silent backend for headless use.
///
/// Keeps the data side usable where no playback output is wanted at all.
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn play_audio(&self, _: &str) {}
    fn pause_audio(&self) {}
}

/// Pick a backend for the OS the process is running on.
pub fn default_backend() -> Arc<dyn AudioBackend> {
    match std::env::consts::OS {
        "windows" => Arc::new(WindowsBackend),
        _ => Arc::new(LinuxBackend),
    }
}

/// Resolve a backend by name: `windows`, `linux`, `null`.
pub fn backend_by_name(name: &str) -> Option<Arc<dyn AudioBackend>> {
    match name {
        "windows" => Some(Arc::new(WindowsBackend)),
        "linux" => Some(Arc::new(LinuxBackend)),
        "null" => Some(Arc::new(NullBackend)),
        _ => None,
    }
}
