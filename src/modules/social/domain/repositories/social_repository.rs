use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::social::domain::Comment;
use crate::shared::errors::VocabResult;

/// Favorites and comments, each independently counted. Counts are SQL
/// aggregates; no method loads a full relation set to report a number.
#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// Flip the user's favorite membership for one entry; returns the new
    /// state (true = now favorited). The flip is atomic, but two racing
    /// toggles by the same user are still a double flip; callers re-read
    /// state before retrying.
    async fn toggle_favorite(&self, entry_id: &Uuid, user_id: &Uuid) -> VocabResult<bool>;

    async fn is_favorited(&self, entry_id: &Uuid, user_id: &Uuid) -> VocabResult<bool>;

    async fn favorite_count(&self, entry_id: &Uuid) -> VocabResult<i64>;

    async fn insert_comment(&self, comment: &Comment) -> VocabResult<Comment>;

    /// Comments for an entry, newest first.
    async fn comments_for_entry(&self, entry_id: &Uuid) -> VocabResult<Vec<Comment>>;

    async fn comment_count(&self, entry_id: &Uuid) -> VocabResult<i64>;

    async fn set_comment_flag(&self, comment_id: &Uuid, flagged: bool) -> VocabResult<Comment>;
}
