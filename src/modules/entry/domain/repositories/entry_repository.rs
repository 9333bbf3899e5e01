use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::entry::domain::entities::{EntryPatch, VocabEntry};
use crate::shared::errors::VocabResult;

/// A mutation to run against one entry while its row is locked. Keeping the
/// variants data-only lets the repository apply them inside its own
/// transaction, so a racing owner edit and reviewer action serialize
/// instead of overwriting each other.
#[derive(Debug, Clone)]
pub enum EntryChange {
    /// Owner edit; carries resolved tags and committed media refs.
    Patch(EntryPatch),
    Approve {
        reviewer: Uuid,
    },
    Reject {
        reviewer: Uuid,
        reason: String,
    },
    ResetToPending,
}

impl VocabEntry {
    pub fn apply(&mut self, change: &EntryChange) {
        match change {
            EntryChange::Patch(patch) => self.apply_patch(patch),
            EntryChange::Approve { reviewer } => self.approve(*reviewer),
            EntryChange::Reject { reviewer, reason } => self.reject(*reviewer, reason.clone()),
            EntryChange::ResetToPending => self.reset_to_pending(),
        }
    }
}

/// Snapshot pair returned by `apply`: the entry as it was under the lock
/// and as it was persisted. Callers use `before` to release superseded
/// media refs.
#[derive(Debug, Clone)]
pub struct EntryMutation {
    pub before: VocabEntry,
    pub after: VocabEntry,
}

/// Per-owner submission totals for the contributor dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Persist a new entry with its tag links. A `(word, language)` pair
    /// already present surfaces as `DuplicateEntry` (database constraint,
    /// not a pre-check).
    async fn insert(&self, entry: &VocabEntry) -> VocabResult<VocabEntry>;

    async fn find_by_id(&self, id: &Uuid) -> VocabResult<Option<VocabEntry>>;

    /// Lock the entry row, apply the change, persist the result atomically.
    /// `NotFound` if the entry does not exist.
    async fn apply(&self, id: &Uuid, change: EntryChange) -> VocabResult<EntryMutation>;

    /// Remove the record; associated links and social rows cascade.
    async fn delete(&self, id: &Uuid) -> VocabResult<()>;

    async fn stats_for_owner(&self, owner_id: &Uuid) -> VocabResult<ContributionStats>;
}
