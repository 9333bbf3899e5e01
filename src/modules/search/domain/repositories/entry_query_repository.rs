use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::entry::domain::VocabEntry;
use crate::modules::search::application::query::{EntryFilter, SortOrder, Viewer};
use crate::shared::application::PaginationParams;
use crate::shared::errors::VocabResult;

/// Read side of the entry store: filtered, sorted, paginated listings plus
/// the visibility-aware single-entry fetch. All queries apply the viewer
/// rule (approved entries, plus the caller's own).
#[async_trait]
pub trait EntryQueryRepository: Send + Sync {
    async fn count(&self, filter: &EntryFilter, viewer: &Viewer) -> VocabResult<u64>;

    /// One page of matches. A free-text hit on several tags of the same
    /// entry still yields that entry once.
    async fn page(
        &self,
        filter: &EntryFilter,
        viewer: &Viewer,
        sort: SortOrder,
        pagination: &PaginationParams,
    ) -> VocabResult<Vec<VocabEntry>>;

    async fn find_visible(&self, id: &Uuid, viewer: &Viewer) -> VocabResult<Option<VocabEntry>>;

    /// Atomically bump the view counter; returns the new value.
    async fn record_view(&self, id: &Uuid) -> VocabResult<i32>;

    /// Approved entries sharing a category, excluding one entry.
    async fn related(
        &self,
        category_id: &Uuid,
        exclude: &Uuid,
        limit: i64,
    ) -> VocabResult<Vec<VocabEntry>>;

    /// The owner's entries in every status, newest first, with total count.
    async fn list_for_owner(
        &self,
        owner_id: &Uuid,
        pagination: &PaginationParams,
    ) -> VocabResult<(Vec<VocabEntry>, u64)>;

    async fn approved_total(&self) -> VocabResult<u64>;
}
