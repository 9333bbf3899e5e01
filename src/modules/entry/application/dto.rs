use uuid::Uuid;

use crate::modules::entry::domain::value_objects::{Difficulty, Language};
use crate::modules::media::domain::MediaRef;

/// Raw upload handed in by the caller: the bytes plus a format token
/// (file extension). Constraint checks happen in the media store.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    pub format: String,
}

/// What should happen to one media slot during an edit.
#[derive(Debug, Clone, Default)]
pub enum MediaChange {
    #[default]
    Keep,
    Clear,
    Replace(MediaUpload),
}

/// A new submission as received from the contributor.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub word: String,
    pub translation: String,
    pub language: Language,
    pub category_id: Option<Uuid>,
    pub difficulty: Difficulty,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub pronunciation_guide: Option<String>,
    pub notes: Option<String>,
    /// Free-text tag names; normalized and deduplicated by the registry.
    pub tags: Vec<String>,
    pub audio: Option<MediaUpload>,
    pub image: Option<MediaUpload>,
}

impl EntryDraft {
    pub fn new(word: impl Into<String>, translation: impl Into<String>, language: Language) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            language,
            category_id: None,
            difficulty: Difficulty::Beginner,
            example_sentence: None,
            example_translation: None,
            pronunciation_guide: None,
            notes: None,
            tags: Vec::new(),
            audio: None,
            image: None,
        }
    }
}

/// An owner edit as received from the caller. `None` leaves a field
/// unchanged; `Some(None)` clears a nullable one.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub language: Option<Language>,
    pub category_id: Option<Option<Uuid>>,
    pub difficulty: Option<Difficulty>,
    pub example_sentence: Option<Option<String>>,
    pub example_translation: Option<Option<String>>,
    pub pronunciation_guide: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    /// Replacement tag set; omitted means "leave tags alone".
    pub tags: Option<Vec<String>>,
    pub audio: MediaChange,
    pub image: MediaChange,
}

/// Outcome report for operations that release media best-effort. Refs that
/// could not be released are listed for out-of-band cleanup.
#[derive(Debug, Clone, Default)]
pub struct MediaCleanup {
    pub orphaned: Vec<MediaRef>,
}
