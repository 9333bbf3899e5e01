use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::entry::domain::value_objects::{Difficulty, Language, ReviewStatus};
use crate::modules::media::domain::MediaRef;
use crate::modules::taxonomy::domain::Tag;

/// A single vocabulary submission. The `(word, language)` pair is unique
/// across all entries; the owner is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    pub id: Uuid,
    pub word: String,
    pub translation: String,
    pub language: Language,
    pub category_id: Option<Uuid>,
    pub difficulty: Difficulty,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub pronunciation_guide: Option<String>,
    pub notes: Option<String>,
    pub audio: Option<MediaRef>,
    pub image: Option<MediaRef>,
    pub status: ReviewStatus,
    pub rejection_reason: Option<String>,
    pub owner_id: Uuid,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub tags: Vec<Tag>,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VocabEntry {
    /// New submissions always start pending, owned by their contributor.
    pub fn new(word: String, translation: String, language: Language, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            word,
            translation,
            language,
            category_id: None,
            difficulty: Difficulty::Beginner,
            example_sentence: None,
            example_translation: None,
            pronunciation_guide: None,
            notes: None,
            audio: None,
            image: None,
            status: ReviewStatus::Pending,
            rejection_reason: None,
            owner_id,
            reviewed_by: None,
            reviewed_at: None,
            tags: Vec::new(),
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.owner_id == *user_id
    }

    /// pending|rejected -> approved. Re-approving an approved entry is a
    /// no-op apart from refreshed review metadata.
    pub fn approve(&mut self, reviewer: Uuid) {
        self.status = ReviewStatus::Approved;
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(Utc::now());
        self.rejection_reason = None;
        self.touch();
    }

    /// pending|approved -> rejected. The reason is recorded even when empty.
    pub fn reject(&mut self, reviewer: Uuid, reason: String) {
        self.status = ReviewStatus::Rejected;
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(Utc::now());
        self.rejection_reason = Some(reason);
        self.touch();
    }

    /// Any state -> pending, clearing all review metadata.
    pub fn reset_to_pending(&mut self) {
        self.status = ReviewStatus::Pending;
        self.reviewed_by = None;
        self.reviewed_at = None;
        self.rejection_reason = None;
        self.touch();
    }

    /// Merge an owner edit into the entry. Editing a rejected entry
    /// re-submits it: the status falls back to pending and review metadata
    /// is cleared. Pending and approved entries keep their status.
    pub fn apply_patch(&mut self, patch: &EntryPatch) {
        if let Some(word) = &patch.word {
            self.word = word.clone();
        }
        if let Some(translation) = &patch.translation {
            self.translation = translation.clone();
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(example_sentence) = &patch.example_sentence {
            self.example_sentence = example_sentence.clone();
        }
        if let Some(example_translation) = &patch.example_translation {
            self.example_translation = example_translation.clone();
        }
        if let Some(pronunciation_guide) = &patch.pronunciation_guide {
            self.pronunciation_guide = pronunciation_guide.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
        if let Some(audio) = &patch.audio {
            self.audio = audio.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }

        if self.status == ReviewStatus::Rejected {
            self.reset_to_pending();
        } else {
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for an owner edit. `None` leaves a field unchanged;
/// for nullable fields, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub language: Option<Language>,
    pub category_id: Option<Option<Uuid>>,
    pub difficulty: Option<Difficulty>,
    pub example_sentence: Option<Option<String>>,
    pub example_translation: Option<Option<String>>,
    pub pronunciation_guide: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub audio: Option<Option<MediaRef>>,
    pub image: Option<Option<MediaRef>>,
    /// Full replacement set; tags are whatever was last submitted.
    pub tags: Option<Vec<Tag>>,
}
