/// Social aggregate tests - favorite toggling and comments against the
/// approved-only gate, with mocked repositories.
mod utils;

use std::sync::Arc;

use uuid::Uuid;

use kiugo::modules::social::application::service::{FavoriteToggle, SocialService};
use kiugo::modules::social::domain::Comment;
use kiugo::shared::errors::VocabError;

use utils::factories;
use utils::mocks::{MockEntryRepo, MockSocialRepo};

fn service(entry_repo: MockEntryRepo, social_repo: MockSocialRepo) -> SocialService {
    SocialService::new(Arc::new(entry_repo), Arc::new(social_repo))
}

fn repo_with_approved_entry(entry_id: &mut Uuid) -> MockEntryRepo {
    let entry = factories::approved_entry(Uuid::new_v4(), Uuid::new_v4());
    *entry_id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));
    entry_repo
}

#[tokio::test]
async fn toggling_twice_returns_to_the_original_state() {
    let mut id = Uuid::nil();
    let entry_repo = repo_with_approved_entry(&mut id);
    let user = Uuid::new_v4();

    let mut social_repo = MockSocialRepo::new();
    let mut toggle_results = vec![true, false].into_iter();
    social_repo
        .expect_toggle_favorite()
        .times(2)
        .returning(move |_, _| Ok(toggle_results.next().unwrap()));
    let mut counts = vec![1i64, 0].into_iter();
    social_repo
        .expect_favorite_count()
        .times(2)
        .returning(move |_| Ok(counts.next().unwrap()));

    let service = service(entry_repo, social_repo);

    let first = service.toggle_favorite(&id, user).await.unwrap();
    assert_eq!(
        first,
        FavoriteToggle {
            favorited: true,
            count: 1
        }
    );

    let second = service.toggle_favorite(&id, user).await.unwrap();
    assert_eq!(
        second,
        FavoriteToggle {
            favorited: false,
            count: 0
        }
    );
}

#[tokio::test]
async fn favoriting_a_pending_entry_looks_like_a_missing_one() {
    let entry = factories::pending_entry(Uuid::new_v4());
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));

    let mut social_repo = MockSocialRepo::new();
    social_repo.expect_toggle_favorite().times(0);

    let err = service(entry_repo, social_repo)
        .toggle_favorite(&id, Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::NotFound(_)));
}

#[tokio::test]
async fn favoriting_a_rejected_entry_looks_like_a_missing_one() {
    let entry = factories::rejected_entry(Uuid::new_v4(), Uuid::new_v4(), "typo");
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));

    let mut social_repo = MockSocialRepo::new();
    social_repo.expect_toggle_favorite().times(0);

    let err = service(entry_repo, social_repo)
        .toggle_favorite(&id, Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::NotFound(_)));
}

#[tokio::test]
async fn short_comments_are_rejected_before_any_lookup() {
    let mut entry_repo = MockEntryRepo::new();
    entry_repo.expect_find_by_id().times(0);
    let mut social_repo = MockSocialRepo::new();
    social_repo.expect_insert_comment().times(0);

    let err = service(entry_repo, social_repo)
        .add_comment(&Uuid::new_v4(), Uuid::new_v4(), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::InvalidComment(_)));
}

#[tokio::test]
async fn overlong_comments_are_rejected() {
    let entry_repo = MockEntryRepo::new();
    let social_repo = MockSocialRepo::new();

    let content = "a".repeat(1001);
    let err = service(entry_repo, social_repo)
        .add_comment(&Uuid::new_v4(), Uuid::new_v4(), &content)
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::InvalidComment(_)));
}

#[tokio::test]
async fn comments_are_trimmed_and_attached_to_the_entry() {
    let mut id = Uuid::nil();
    let entry_repo = repo_with_approved_entry(&mut id);
    let author = Uuid::new_v4();

    let mut social_repo = MockSocialRepo::new();
    social_repo
        .expect_insert_comment()
        .withf(|comment: &Comment| comment.content == "karibu mũno")
        .times(1)
        .returning(|comment| Ok(comment.clone()));

    let comment = service(entry_repo, social_repo)
        .add_comment(&id, author, "  karibu mũno  ")
        .await
        .unwrap();

    assert_eq!(comment.entry_id, id);
    assert_eq!(comment.author_id, author);
    assert!(!comment.is_flagged);
}

#[tokio::test]
async fn commenting_on_a_pending_entry_looks_like_a_missing_one() {
    let entry = factories::pending_entry(Uuid::new_v4());
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));
    let mut social_repo = MockSocialRepo::new();
    social_repo.expect_insert_comment().times(0);

    let err = service(entry_repo, social_repo)
        .add_comment(&id, Uuid::new_v4(), "a valid comment")
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::NotFound(_)));
}

#[tokio::test]
async fn flagging_toggles_only_the_moderation_bit() {
    let comment = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "word used wrong".to_string());
    let comment_id = comment.id;

    let entry_repo = MockEntryRepo::new();
    let mut social_repo = MockSocialRepo::new();
    social_repo
        .expect_set_comment_flag()
        .withf(move |id, flagged| *id == comment_id && *flagged)
        .times(1)
        .returning(move |_, flagged| {
            let mut updated = comment.clone();
            updated.is_flagged = flagged;
            Ok(updated)
        });

    let flagged = service(entry_repo, social_repo)
        .flag_comment(&comment_id)
        .await
        .unwrap();

    assert!(flagged.is_flagged);
    assert_eq!(flagged.content, "word used wrong");
}
