//! Error types.

use thiserror::Error;

use crate::models::media::Format;

/// Errors surfaced by the player's advisory checks.
///
/// Playback itself never fails here: the simulated backends accept any
/// path, and the play paths keep invoking them even for unsupported
/// formats. This type only gives callers an explicit result to inspect
/// before playing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("unsupported format {format} for {path}")]
    UnsupportedFormat { format: Format, path: String },
}
