use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::VocabError;

const MIB: usize = 1024 * 1024;

/// The two asset slots an entry can carry, each with its own size cap and
/// accepted formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    pub fn max_bytes(&self) -> usize {
        match self {
            MediaKind::Audio => 10 * MIB,
            MediaKind::Image => 5 * MIB,
        }
    }

    pub fn allowed_formats(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Audio => &["mp3", "wav", "ogg", "m4a"],
            MediaKind::Image => &["jpg", "jpeg", "png", "webp"],
        }
    }

    /// Normalize a caller-supplied format token (extension, with or without
    /// a leading dot, any case).
    pub fn normalize_format(format: &str) -> String {
        format.trim().trim_start_matches('.').to_lowercase()
    }

    pub fn accepts(&self, format: &str) -> bool {
        let fmt = Self::normalize_format(format);
        self.allowed_formats().contains(&fmt.as_str())
    }

    /// Check an upload against this kind's constraints. Runs before any byte
    /// reaches storage.
    pub fn validate(&self, byte_len: usize, format: &str) -> Result<(), VocabError> {
        if !self.accepts(format) {
            return Err(VocabError::UnsupportedFormat(format!(
                "'{}' is not an accepted {} format (expected one of {})",
                format,
                self,
                self.allowed_formats().join(", ")
            )));
        }
        if byte_len > self.max_bytes() {
            return Err(VocabError::TooLarge(format!(
                "{} upload of {} bytes exceeds the {} MiB limit",
                self,
                byte_len,
                self.max_bytes() / MIB
            )));
        }
        Ok(())
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Image => write!(f, "image"),
        }
    }
}
