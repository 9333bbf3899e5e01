use async_trait::async_trait;

use crate::modules::taxonomy::domain::Tag;
use crate::shared::errors::VocabResult;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Get-or-create one tag per normalized name, in a single atomic batch.
    /// Returns the canonical records in name order.
    async fn get_or_create_many(&self, names: &[String]) -> VocabResult<Vec<Tag>>;

    async fn find_by_name(&self, name: &str) -> VocabResult<Option<Tag>>;

    async fn get_all(&self) -> VocabResult<Vec<Tag>>;
}
