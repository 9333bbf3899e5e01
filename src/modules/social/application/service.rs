use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::entry::domain::{EntryRepository, VocabEntry};
use crate::modules::social::domain::{Comment, SocialRepository};
use crate::shared::errors::{VocabError, VocabResult};
use crate::shared::utils::Validator;

/// Payload returned by a favorite toggle, shaped for direct JSON exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub favorited: bool,
    pub count: i64,
}

/// Favorites and comments against approved entries. Non-approved entries
/// are reported as absent so their existence never leaks through social
/// endpoints.
pub struct SocialService {
    entry_repo: Arc<dyn EntryRepository>,
    social_repo: Arc<dyn SocialRepository>,
}

impl SocialService {
    pub fn new(entry_repo: Arc<dyn EntryRepository>, social_repo: Arc<dyn SocialRepository>) -> Self {
        Self {
            entry_repo,
            social_repo,
        }
    }

    pub async fn toggle_favorite(&self, id: &Uuid, user_id: Uuid) -> VocabResult<FavoriteToggle> {
        self.approved_or_not_found(id).await?;

        let favorited = self.social_repo.toggle_favorite(id, &user_id).await?;
        let count = self.social_repo.favorite_count(id).await?;

        log::debug!(
            "user {} {} entry {} ({} favorites)",
            user_id,
            if favorited { "favorited" } else { "unfavorited" },
            id,
            count
        );
        Ok(FavoriteToggle { favorited, count })
    }

    pub async fn is_favorited(&self, id: &Uuid, user_id: &Uuid) -> VocabResult<bool> {
        self.social_repo.is_favorited(id, user_id).await
    }

    pub async fn add_comment(
        &self,
        id: &Uuid,
        author_id: Uuid,
        content: &str,
    ) -> VocabResult<Comment> {
        let content = Validator::validate_comment_content(content)?;
        self.approved_or_not_found(id).await?;

        let comment = Comment::new(*id, author_id, content);
        let saved = self.social_repo.insert_comment(&comment).await?;
        log::debug!("comment {} added to entry {}", saved.id, id);
        Ok(saved)
    }

    pub async fn comments(&self, id: &Uuid) -> VocabResult<Vec<Comment>> {
        self.approved_or_not_found(id).await?;
        self.social_repo.comments_for_entry(id).await
    }

    pub async fn favorite_count(&self, id: &Uuid) -> VocabResult<i64> {
        self.social_repo.favorite_count(id).await
    }

    pub async fn comment_count(&self, id: &Uuid) -> VocabResult<i64> {
        self.social_repo.comment_count(id).await
    }

    /// Moderation flag on a single comment, independent of the entry's
    /// review status.
    pub async fn flag_comment(&self, comment_id: &Uuid) -> VocabResult<Comment> {
        self.social_repo.set_comment_flag(comment_id, true).await
    }

    pub async fn unflag_comment(&self, comment_id: &Uuid) -> VocabResult<Comment> {
        self.social_repo.set_comment_flag(comment_id, false).await
    }

    async fn approved_or_not_found(&self, id: &Uuid) -> VocabResult<VocabEntry> {
        match self.entry_repo.find_by_id(id).await? {
            Some(entry) if entry.status.is_approved() => Ok(entry),
            // Pending and rejected entries are indistinguishable from
            // absent ones here.
            _ => Err(VocabError::NotFound(format!("Entry {} not found", id))),
        }
    }
}
