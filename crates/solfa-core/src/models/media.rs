//! Media format classification.
//!
//! A string enum for type-safe matching; serializes to a plain string.
//! Classification never fails: unknown extensions fall through to Other.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Container/codec format, derived from a file extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    MP3,
    WAV,
    AAC,
    FLAC,
    Other(String),
}

impl Format {
    /// Classify by extension, case-insensitive.
    pub fn from_path(file_path: &str) -> Self {
        let ext = Path::new(file_path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "mp3" => Format::MP3,
            "wav" => Format::WAV,
            "aac" | "m4a" => Format::AAC,
            "flac" => Format::FLAC,
            other => Format::Other(other.to_uppercase()),
        }
    }

    /// Whether the simulated players accept this format.
    ///
    /// AAC and FLAC are recognized but not accepted. The play paths still
    /// invoke the backend for them; see `PlayerError::UnsupportedFormat`.
    pub fn is_supported(&self) -> bool {
        matches!(self, Format::MP3 | Format::WAV)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::MP3 => write!(f, "MP3"),
            Format::WAV => write!(f, "WAV"),
            Format::AAC => write!(f, "AAC"),
            Format::FLAC => write!(f, "FLAC"),
            Format::Other(s) => write!(f, "{}", s),
        }
    }
}
