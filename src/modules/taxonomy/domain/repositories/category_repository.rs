use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::taxonomy::domain::{Category, CategoryListing};
use crate::shared::errors::VocabResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: &Category) -> VocabResult<Category>;

    async fn find_by_id(&self, id: &Uuid) -> VocabResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &str) -> VocabResult<Option<Category>>;

    /// Categories holding at least one approved entry, with counts.
    async fn list_with_counts(&self) -> VocabResult<Vec<CategoryListing>>;

    /// Remove the category record. Entries referencing it survive with the
    /// reference unset (enforced by the schema's ON DELETE SET NULL).
    async fn delete(&self, id: &Uuid) -> VocabResult<()>;
}
