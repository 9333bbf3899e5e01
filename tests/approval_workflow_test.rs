/// Approval workflow tests - reviewer transitions over the entry state
/// machine, with mocked persistence.
///
/// Covers:
/// - approve/reject/reset metadata handling
/// - Idempotent re-application of settled transitions
/// - Reviewer-distinct-from-owner rule
mod utils;

use std::sync::Arc;

use uuid::Uuid;

use kiugo::modules::entry::domain::{EntryChange, EntryMutation, ReviewStatus, VocabEntry};
use kiugo::modules::review::application::workflow::ApprovalWorkflow;
use kiugo::shared::errors::VocabError;

use utils::factories;
use utils::mocks::MockEntryRepo;

/// Wire the mock so `apply` exercises the real entity transition logic.
fn repo_for(entry: VocabEntry, expected: fn(&EntryChange) -> bool) -> MockEntryRepo {
    let mut entry_repo = MockEntryRepo::new();
    let for_find = entry.clone();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(for_find.clone())));
    entry_repo
        .expect_apply()
        .withf(move |_, change| expected(change))
        .times(1)
        .returning(move |_, change| {
            let before = entry.clone();
            let mut after = before.clone();
            after.apply(&change);
            Ok(EntryMutation { before, after })
        });
    entry_repo
}

#[tokio::test]
async fn approving_a_pending_entry_sets_review_metadata() {
    let owner = Uuid::new_v4();
    let reviewer = Uuid::new_v4();
    let entry = factories::pending_entry(owner);
    let id = entry.id;

    let workflow = ApprovalWorkflow::new(Arc::new(repo_for(entry, |change| {
        matches!(change, EntryChange::Approve { .. })
    })));

    let approved = workflow.approve(&id, reviewer).await.unwrap();
    assert_eq!(approved.status, ReviewStatus::Approved);
    assert_eq!(approved.reviewed_by, Some(reviewer));
    assert!(approved.reviewed_at.is_some());
    assert!(approved.rejection_reason.is_none());
}

#[tokio::test]
async fn approving_a_rejected_entry_clears_the_reason() {
    let owner = Uuid::new_v4();
    let reviewer = Uuid::new_v4();
    let entry = factories::rejected_entry(owner, Uuid::new_v4(), "typo");
    let id = entry.id;

    let workflow = ApprovalWorkflow::new(Arc::new(repo_for(entry, |change| {
        matches!(change, EntryChange::Approve { .. })
    })));

    let approved = workflow.approve(&id, reviewer).await.unwrap();
    assert_eq!(approved.status, ReviewStatus::Approved);
    assert!(approved.rejection_reason.is_none());
}

#[tokio::test]
async fn reapproval_is_a_noop_that_refreshes_metadata() {
    let owner = Uuid::new_v4();
    let first_reviewer = Uuid::new_v4();
    let second_reviewer = Uuid::new_v4();
    let entry = factories::approved_entry(owner, first_reviewer);
    let id = entry.id;

    let workflow = ApprovalWorkflow::new(Arc::new(repo_for(entry, |change| {
        matches!(change, EntryChange::Approve { .. })
    })));

    let approved = workflow.approve(&id, second_reviewer).await.unwrap();
    assert_eq!(approved.status, ReviewStatus::Approved);
    assert_eq!(approved.reviewed_by, Some(second_reviewer));
}

#[tokio::test]
async fn reject_records_the_reason_even_when_empty() {
    let owner = Uuid::new_v4();
    let reviewer = Uuid::new_v4();
    let entry = factories::pending_entry(owner);
    let id = entry.id;

    let workflow = ApprovalWorkflow::new(Arc::new(repo_for(entry, |change| {
        matches!(change, EntryChange::Reject { reason, .. } if reason.is_empty())
    })));

    let rejected = workflow.reject(&id, reviewer, String::new()).await.unwrap();
    assert_eq!(rejected.status, ReviewStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some(""));
    assert_eq!(rejected.reviewed_by, Some(reviewer));
}

#[tokio::test]
async fn reset_clears_all_review_metadata() {
    let owner = Uuid::new_v4();
    let reviewer = Uuid::new_v4();
    let entry = factories::rejected_entry(owner, reviewer, "needs audio");
    let id = entry.id;

    let workflow = ApprovalWorkflow::new(Arc::new(repo_for(entry, |change| {
        matches!(change, EntryChange::ResetToPending)
    })));

    let pending = workflow.reset_to_pending(&id, reviewer).await.unwrap();
    assert_eq!(pending.status, ReviewStatus::Pending);
    assert!(pending.reviewed_by.is_none());
    assert!(pending.reviewed_at.is_none());
    assert!(pending.rejection_reason.is_none());
}

#[tokio::test]
async fn contributors_cannot_review_their_own_entries() {
    let owner = Uuid::new_v4();
    let entry = factories::pending_entry(owner);
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));
    entry_repo.expect_apply().times(0);

    let workflow = ApprovalWorkflow::new(Arc::new(entry_repo));
    let err = workflow.approve(&id, owner).await.unwrap_err();

    assert!(matches!(err, VocabError::Forbidden(_)));
}

#[tokio::test]
async fn reviewing_a_missing_entry_reports_not_found() {
    let mut entry_repo = MockEntryRepo::new();
    entry_repo.expect_find_by_id().returning(|_| Ok(None));
    entry_repo.expect_apply().times(0);

    let workflow = ApprovalWorkflow::new(Arc::new(entry_repo));
    let err = workflow
        .reject(&Uuid::new_v4(), Uuid::new_v4(), "reason".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::NotFound(_)));
}
