use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::domain::{EntryChange, EntryRepository, ReviewStatus, VocabEntry};
use crate::shared::errors::{VocabError, VocabResult};

/// Reviewer-driven moderation of entries: pending -> approved/rejected,
/// with both settled states resettable to pending. Transitions run under
/// the entry row lock; re-applying a transition the entry is already in is
/// a no-op that refreshes the review metadata.
///
/// The one owner-triggered transition (a rejected entry falling back to
/// pending when edited) lives in the entry's patch logic, not here.
pub struct ApprovalWorkflow {
    entry_repo: Arc<dyn EntryRepository>,
}

impl ApprovalWorkflow {
    pub fn new(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }

    pub async fn approve(&self, id: &Uuid, reviewer: Uuid) -> VocabResult<VocabEntry> {
        self.guard_reviewer(id, &reviewer).await?;

        let mutation = self
            .entry_repo
            .apply(id, EntryChange::Approve { reviewer })
            .await?;

        if mutation.before.status != ReviewStatus::Approved {
            log::info!(
                "entry {} '{}' approved by {}",
                id,
                mutation.after.word,
                reviewer
            );
        }
        Ok(mutation.after)
    }

    pub async fn reject(
        &self,
        id: &Uuid,
        reviewer: Uuid,
        reason: String,
    ) -> VocabResult<VocabEntry> {
        self.guard_reviewer(id, &reviewer).await?;

        let mutation = self
            .entry_repo
            .apply(id, EntryChange::Reject { reviewer, reason })
            .await?;

        if mutation.before.status != ReviewStatus::Rejected {
            log::info!(
                "entry {} '{}' rejected by {}",
                id,
                mutation.after.word,
                reviewer
            );
        }
        Ok(mutation.after)
    }

    pub async fn reset_to_pending(&self, id: &Uuid, reviewer: Uuid) -> VocabResult<VocabEntry> {
        self.guard_reviewer(id, &reviewer).await?;

        let mutation = self.entry_repo.apply(id, EntryChange::ResetToPending).await?;
        log::info!("entry {} sent back to review queue by {}", id, reviewer);
        Ok(mutation.after)
    }

    /// Reviewers are a distinct role from contributors; nobody moderates
    /// their own submission.
    async fn guard_reviewer(&self, id: &Uuid, reviewer: &Uuid) -> VocabResult<()> {
        let entry = self
            .entry_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| VocabError::NotFound(format!("Entry {} not found", id)))?;

        if entry.is_owned_by(reviewer) {
            return Err(VocabError::Forbidden(
                "Contributors cannot review their own entries".to_string(),
            ));
        }
        Ok(())
    }
}
