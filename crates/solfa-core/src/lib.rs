//! solfa-core: bridge-pattern music player engine.
//!
//! The player abstraction and the platform playback implementations vary
//! independently:
//!
//! ```text
//! MusicPlayer / RefinedMusicPlayer       (abstraction: state + orchestration)
//!         |
//!         v  Arc<dyn AudioBackend>
//! WindowsBackend | LinuxBackend | NullBackend   (implementation: simulated output)
//! ```
//!
//! Backends only print simulated actions; real OS audio calls are external
//! collaborators this crate never touches. Everything is synchronous and
//! single-threaded; `SharedPlaylist` exists for aliasing, not contention.

pub mod backend;
pub mod error;
pub mod models;
pub mod player;

pub use backend::{
    backend_by_name, default_backend, AudioBackend, LinuxBackend, NullBackend, WindowsBackend,
};
pub use error::PlayerError;
pub use models::*;
pub use player::{MusicPlayer, RefinedMusicPlayer};
