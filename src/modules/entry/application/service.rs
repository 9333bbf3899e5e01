use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::dto::{
    EntryDraft, EntryUpdate, MediaChange, MediaCleanup, MediaUpload,
};
use crate::modules::entry::domain::{
    ContributionStats, EntryChange, EntryPatch, EntryRepository, VocabEntry,
};
use crate::modules::media::domain::{MediaKind, MediaRef, MediaStore};
use crate::modules::taxonomy::application::registry::TagRegistry;
use crate::shared::errors::{VocabError, VocabResult};
use crate::shared::utils::Validator;

/// Contributor-facing entry lifecycle: create, edit, delete. Review
/// transitions live in the approval workflow; read paths in the search
/// engine.
pub struct EntryService {
    entry_repo: Arc<dyn EntryRepository>,
    tag_registry: Arc<TagRegistry>,
    media_store: Arc<dyn MediaStore>,
}

impl EntryService {
    pub fn new(
        entry_repo: Arc<dyn EntryRepository>,
        tag_registry: Arc<TagRegistry>,
        media_store: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            entry_repo,
            tag_registry,
            media_store,
        }
    }

    pub async fn create(&self, draft: EntryDraft, owner_id: Uuid) -> VocabResult<VocabEntry> {
        Validator::validate_word(&draft.word)?;
        Validator::validate_translation(&draft.translation)?;

        let tags = self.tag_registry.resolve(&draft.tags).await?;

        // Uploads are persisted before the row exists; if the insert fails
        // they are released again so nothing is orphaned.
        let audio = match &draft.audio {
            Some(upload) => Some(self.store_upload(MediaKind::Audio, upload).await?),
            None => None,
        };
        let image = match &draft.image {
            Some(upload) => match self.store_upload(MediaKind::Image, upload).await {
                Ok(media_ref) => Some(media_ref),
                Err(e) => {
                    self.discard(audio.as_ref()).await;
                    return Err(e);
                }
            },
            None => None,
        };

        let mut entry = VocabEntry::new(draft.word, draft.translation, draft.language, owner_id);
        entry.category_id = draft.category_id;
        entry.difficulty = draft.difficulty;
        entry.example_sentence = draft.example_sentence;
        entry.example_translation = draft.example_translation;
        entry.pronunciation_guide = draft.pronunciation_guide;
        entry.notes = draft.notes;
        entry.audio = audio;
        entry.image = image;
        entry.tags = tags;

        match self.entry_repo.insert(&entry).await {
            Ok(saved) => {
                log::info!(
                    "entry {} '{}' ({}) submitted by {}",
                    saved.id,
                    saved.word,
                    saved.language,
                    owner_id
                );
                Ok(saved)
            }
            Err(e) => {
                self.discard(entry.audio.as_ref()).await;
                self.discard(entry.image.as_ref()).await;
                Err(e)
            }
        }
    }

    /// Owner edit. Replacement media is stored first and the superseded
    /// asset released only after the new ref is committed; a failed commit
    /// releases the replacement instead, never the asset still referenced.
    pub async fn update(
        &self,
        id: &Uuid,
        update: EntryUpdate,
        acting_user: Uuid,
    ) -> VocabResult<VocabEntry> {
        let existing = self
            .entry_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| VocabError::NotFound(format!("Entry {} not found", id)))?;
        if !existing.is_owned_by(&acting_user) {
            return Err(VocabError::Forbidden(
                "Only the contributor can edit this entry".to_string(),
            ));
        }

        if let Some(word) = &update.word {
            Validator::validate_word(word)?;
        }
        if let Some(translation) = &update.translation {
            Validator::validate_translation(translation)?;
        }

        let tags = match &update.tags {
            Some(raw) => Some(self.tag_registry.resolve(raw).await?),
            None => None,
        };

        let new_audio = match &update.audio {
            MediaChange::Replace(upload) => Some(self.store_upload(MediaKind::Audio, upload).await?),
            _ => None,
        };
        let new_image = match &update.image {
            MediaChange::Replace(upload) => match self.store_upload(MediaKind::Image, upload).await
            {
                Ok(media_ref) => Some(media_ref),
                Err(e) => {
                    self.discard(new_audio.as_ref()).await;
                    return Err(e);
                }
            },
            _ => None,
        };

        let patch = EntryPatch {
            word: update.word,
            translation: update.translation,
            language: update.language,
            category_id: update.category_id,
            difficulty: update.difficulty,
            example_sentence: update.example_sentence,
            example_translation: update.example_translation,
            pronunciation_guide: update.pronunciation_guide,
            notes: update.notes,
            audio: match &update.audio {
                MediaChange::Keep => None,
                MediaChange::Clear => Some(None),
                MediaChange::Replace(_) => Some(new_audio.clone()),
            },
            image: match &update.image {
                MediaChange::Keep => None,
                MediaChange::Clear => Some(None),
                MediaChange::Replace(_) => Some(new_image.clone()),
            },
            tags,
        };

        match self.entry_repo.apply(id, EntryChange::Patch(patch)).await {
            Ok(mutation) => {
                // New refs are durable now; the old assets can go.
                self.release_superseded(mutation.before.audio.as_ref(), mutation.after.audio.as_ref())
                    .await;
                self.release_superseded(mutation.before.image.as_ref(), mutation.after.image.as_ref())
                    .await;
                log::info!("entry {} updated by {}", id, acting_user);
                Ok(mutation.after)
            }
            Err(e) => {
                self.discard(new_audio.as_ref()).await;
                self.discard(new_image.as_ref()).await;
                Err(e)
            }
        }
    }

    /// Owner deletion. The record goes first; asset release is best-effort
    /// and failures are reported as orphans rather than blocking the
    /// deletion.
    pub async fn delete(&self, id: &Uuid, acting_user: Uuid) -> VocabResult<MediaCleanup> {
        let existing = self
            .entry_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| VocabError::NotFound(format!("Entry {} not found", id)))?;
        if !existing.is_owned_by(&acting_user) {
            return Err(VocabError::Forbidden(
                "Only the contributor can delete this entry".to_string(),
            ));
        }

        self.remove(existing).await
    }

    /// Moderator deletion: same removal path without the ownership check.
    pub async fn admin_delete(&self, id: &Uuid) -> VocabResult<MediaCleanup> {
        let existing = self
            .entry_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| VocabError::NotFound(format!("Entry {} not found", id)))?;

        self.remove(existing).await
    }

    pub async fn contribution_stats(&self, owner_id: &Uuid) -> VocabResult<ContributionStats> {
        self.entry_repo.stats_for_owner(owner_id).await
    }

    async fn remove(&self, entry: VocabEntry) -> VocabResult<MediaCleanup> {
        self.entry_repo.delete(&entry.id).await?;

        let mut cleanup = MediaCleanup::default();
        for media_ref in [entry.audio, entry.image].into_iter().flatten() {
            if let Err(e) = self.media_store.release(&media_ref).await {
                log::warn!("entry {}: {}", entry.id, e);
                cleanup.orphaned.push(media_ref);
            }
        }

        log::info!("entry {} '{}' deleted", entry.id, entry.word);
        Ok(cleanup)
    }

    async fn store_upload(&self, kind: MediaKind, upload: &MediaUpload) -> VocabResult<MediaRef> {
        self.media_store
            .store(kind, &upload.bytes, &upload.format)
            .await
    }

    /// Release `before` when the committed state no longer references it.
    async fn release_superseded(&self, before: Option<&MediaRef>, after: Option<&MediaRef>) {
        if let Some(old) = before {
            if after != Some(old) {
                if let Err(e) = self.media_store.release(old).await {
                    log::warn!("superseded asset left orphaned: {}", e);
                }
            }
        }
    }

    async fn discard(&self, media_ref: Option<&MediaRef>) {
        if let Some(media_ref) = media_ref {
            if let Err(e) = self.media_store.release(media_ref).await {
                log::warn!("failed to discard unused asset: {}", e);
            }
        }
    }
}
