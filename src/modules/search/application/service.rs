use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::domain::VocabEntry;
use crate::modules::search::application::query::{EntryFilter, SortOrder, Viewer};
use crate::modules::search::application::view_tracker::ViewTracker;
use crate::modules::search::domain::EntryQueryRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{VocabError, VocabResult};

/// How many same-category entries the detail page suggests.
pub const RELATED_LIMIT: i64 = 6;

/// Read paths over the vocabulary: filtered listings, the visibility-aware
/// detail fetch with session-scoped view counting, related entries and the
/// contributor's own listing.
pub struct SearchService {
    query_repo: Arc<dyn EntryQueryRepository>,
    views: Arc<ViewTracker>,
}

impl SearchService {
    pub fn new(query_repo: Arc<dyn EntryQueryRepository>, views: Arc<ViewTracker>) -> Self {
        Self { query_repo, views }
    }

    /// Filtered, sorted, fixed-size-paginated listing. Out-of-range pages
    /// come back empty rather than erroring.
    pub async fn list(
        &self,
        filter: EntryFilter,
        sort: SortOrder,
        page: u32,
        viewer: &Viewer,
    ) -> VocabResult<PaginatedResult<VocabEntry>> {
        let filter = filter.normalized();
        let pagination = PaginationParams::new(page);

        let total = self.query_repo.count(&filter, viewer).await?;
        let items = if pagination.offset() >= total as i64 {
            Vec::new()
        } else {
            self.query_repo
                .page(&filter, viewer, sort, &pagination)
                .await?
        };

        Ok(PaginatedResult::new(items, total, &pagination))
    }

    /// Fetch one visible entry. The view counter moves at most once per
    /// viewer session; repeat views still return the entry.
    pub async fn view(
        &self,
        id: &Uuid,
        viewer: &Viewer,
        session: &str,
    ) -> VocabResult<VocabEntry> {
        let mut entry = self
            .query_repo
            .find_visible(id, viewer)
            .await?
            .ok_or_else(|| VocabError::NotFound(format!("Entry {} not found", id)))?;

        if self.views.first_view(session, *id) {
            entry.view_count = self.query_repo.record_view(id).await?;
        }

        Ok(entry)
    }

    /// Up to six other approved entries from the same category; empty when
    /// the entry is uncategorized.
    pub async fn related(&self, entry: &VocabEntry) -> VocabResult<Vec<VocabEntry>> {
        match entry.category_id {
            Some(category_id) => {
                self.query_repo
                    .related(&category_id, &entry.id, RELATED_LIMIT)
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    /// The contributor dashboard listing: the owner's entries in every
    /// status, newest first.
    pub async fn list_mine(
        &self,
        owner_id: &Uuid,
        page: u32,
    ) -> VocabResult<PaginatedResult<VocabEntry>> {
        let pagination = PaginationParams::new(page);
        let (items, total) = self.query_repo.list_for_owner(owner_id, &pagination).await?;
        Ok(PaginatedResult::new(items, total, &pagination))
    }

    /// Size of the public corpus.
    pub async fn approved_total(&self) -> VocabResult<u64> {
        self.query_repo.approved_total().await
    }
}
