use crate::schema::{entries, entry_tags};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::entry::domain::{Difficulty, Language, ReviewStatus, VocabEntry};
use crate::modules::media::domain::MediaRef;
use crate::modules::taxonomy::domain::Tag;

// ================== ENTRY MODELS ==================

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = entries)]
pub struct EntryRow {
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
    pub audio_ref: Option<String>,
    pub image_ref: Option<String>,
    pub status: ReviewStatus,
    pub rejection_reason: Option<String>,
    pub owner_id: Uuid,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload (write)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = entries)]
pub struct NewEntry {
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
    pub audio_ref: Option<String>,
    pub image_ref: Option<String>,
    pub status: ReviewStatus,
    pub rejection_reason: Option<String>,
    pub owner_id: Uuid,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update payload (write) — excludes `id`, `owner_id`, `view_count` and
/// `created_at`. None values write NULL: the changeset is always built from
/// a full entity snapshot, so a None really means "cleared".
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = entries)]
#[diesel(treat_none_as_null = true)]
pub struct EntryChangeset {
    pub word: String,
    pub translation: String,
    pub language: Language,
    pub category_id: Option<Uuid>,
    pub difficulty: Difficulty,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub pronunciation_guide: Option<String>,
    pub notes: Option<String>,
    pub audio_ref: Option<String>,
    pub image_ref: Option<String>,
    pub status: ReviewStatus,
    pub rejection_reason: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

// ============= ENTRY-TAG ASSOCIATION (join) =============

#[derive(Queryable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = entry_tags)]
#[diesel(primary_key(entry_id, tag_id))]
pub struct EntryTagLink {
    pub entry_id: Uuid,
    pub tag_id: Uuid,
}

// ================== MAPPING HELPERS ==================

pub fn entry_from_row(row: EntryRow, tags: Vec<Tag>) -> VocabEntry {
    VocabEntry {
        id: row.id,
        word: row.word,
        translation: row.translation,
        language: row.language,
        category_id: row.category_id,
        difficulty: row.difficulty,
        example_sentence: row.example_sentence,
        example_translation: row.example_translation,
        pronunciation_guide: row.pronunciation_guide,
        notes: row.notes,
        audio: row.audio_ref.map(MediaRef::from),
        image: row.image_ref.map(MediaRef::from),
        status: row.status,
        rejection_reason: row.rejection_reason,
        owner_id: row.owner_id,
        reviewed_by: row.reviewed_by,
        reviewed_at: row.reviewed_at,
        tags,
        view_count: row.view_count,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub fn new_row_from_entity(entity: &VocabEntry) -> NewEntry {
    NewEntry {
        id: entity.id,
        word: entity.word.clone(),
        translation: entity.translation.clone(),
        language: entity.language,
        category_id: entity.category_id,
        difficulty: entity.difficulty,
        example_sentence: entity.example_sentence.clone(),
        example_translation: entity.example_translation.clone(),
        pronunciation_guide: entity.pronunciation_guide.clone(),
        notes: entity.notes.clone(),
        audio_ref: entity.audio.as_ref().map(|r| r.as_str().to_string()),
        image_ref: entity.image.as_ref().map(|r| r.as_str().to_string()),
        status: entity.status,
        rejection_reason: entity.rejection_reason.clone(),
        owner_id: entity.owner_id,
        reviewed_by: entity.reviewed_by,
        reviewed_at: entity.reviewed_at,
        view_count: entity.view_count,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

pub fn changeset_from_entity(entity: &VocabEntry) -> EntryChangeset {
    EntryChangeset {
        word: entity.word.clone(),
        translation: entity.translation.clone(),
        language: entity.language,
        category_id: entity.category_id,
        difficulty: entity.difficulty,
        example_sentence: entity.example_sentence.clone(),
        example_translation: entity.example_translation.clone(),
        pronunciation_guide: entity.pronunciation_guide.clone(),
        notes: entity.notes.clone(),
        audio_ref: entity.audio.as_ref().map(|r| r.as_str().to_string()),
        image_ref: entity.image.as_ref().map(|r| r.as_str().to_string()),
        status: entity.status,
        rejection_reason: entity.rejection_reason.clone(),
        reviewed_by: entity.reviewed_by,
        reviewed_at: entity.reviewed_at,
        updated_at: entity.updated_at,
    }
}
