/// Entry lifecycle tests - create/update/delete through the service with
/// mocked persistence and media storage.
///
/// Covers:
/// - Pending status and ownership on creation
/// - Duplicate submission surfacing
/// - Media store/release ordering on replace, clear, failure and delete
/// - Ownership checks on edit/delete
mod utils;

use std::sync::Arc;

use mockall::Sequence;
use uuid::Uuid;

use kiugo::modules::entry::application::dto::{EntryDraft, EntryUpdate, MediaChange, MediaUpload};
use kiugo::modules::entry::application::service::EntryService;
use kiugo::modules::entry::domain::{EntryChange, EntryMutation, Language, ReviewStatus};
use kiugo::modules::media::domain::MediaRef;
use kiugo::modules::taxonomy::application::registry::TagRegistry;
use kiugo::shared::errors::VocabError;

use utils::factories;
use utils::mocks::{MockEntryRepo, MockMediaStore, MockTagRepo};

fn service(
    entry_repo: MockEntryRepo,
    tag_repo: MockTagRepo,
    media: MockMediaStore,
) -> EntryService {
    EntryService::new(
        Arc::new(entry_repo),
        Arc::new(TagRegistry::new(Arc::new(tag_repo))),
        Arc::new(media),
    )
}

fn upload(format: &str) -> MediaUpload {
    MediaUpload {
        bytes: b"asset bytes".to_vec(),
        format: format.to_string(),
    }
}

#[tokio::test]
async fn create_persists_a_pending_entry_for_its_owner() {
    let owner = Uuid::new_v4();

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_insert()
        .times(1)
        .returning(|entry| Ok(entry.clone()));

    let service = service(entry_repo, MockTagRepo::new(), MockMediaStore::new());
    let draft = EntryDraft::new("wĩ mwega", "you are well", Language::Kikuyu);

    let saved = service.create(draft, owner).await.unwrap();

    assert_eq!(saved.status, ReviewStatus::Pending);
    assert_eq!(saved.owner_id, owner);
    assert!(saved.reviewed_by.is_none());
    assert!(saved.reviewed_at.is_none());
}

#[tokio::test]
async fn duplicate_submission_surfaces_duplicate_entry() {
    let mut entry_repo = MockEntryRepo::new();
    entry_repo.expect_insert().times(1).returning(|_| {
        Err(VocabError::DuplicateEntry(
            "'wĩ mwega' has already been submitted for Kikuyu".to_string(),
        ))
    });

    let service = service(entry_repo, MockTagRepo::new(), MockMediaStore::new());
    let draft = EntryDraft::new("wĩ mwega", "you are well", Language::Kikuyu);

    let err = service.create(draft, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, VocabError::DuplicateEntry(_)));
}

#[tokio::test]
async fn failed_insert_releases_the_freshly_stored_upload() {
    let mut seq = Sequence::new();

    let mut media = MockMediaStore::new();
    media
        .expect_store()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(MediaRef::new("audio/new.mp3")));

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_insert()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(VocabError::DatabaseError("insert failed".to_string())));

    media
        .expect_release()
        .withf(|media_ref| media_ref.as_str() == "audio/new.mp3")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let service = service(entry_repo, MockTagRepo::new(), media);
    let mut draft = EntryDraft::new("wĩ mwega", "you are well", Language::Kikuyu);
    draft.audio = Some(upload("mp3"));

    let err = service.create(draft, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, VocabError::DatabaseError(_)));
}

#[tokio::test]
async fn only_the_owner_can_edit() {
    let owner = Uuid::new_v4();
    let entry = factories::pending_entry(owner);
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(entry.clone())));
    entry_repo.expect_apply().times(0);

    let service = service(entry_repo, MockTagRepo::new(), MockMediaStore::new());
    let err = service
        .update(&id, EntryUpdate::default(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::Forbidden(_)));
}

#[tokio::test]
async fn editing_a_missing_entry_reports_not_found() {
    let mut entry_repo = MockEntryRepo::new();
    entry_repo.expect_find_by_id().returning(|_| Ok(None));

    let service = service(entry_repo, MockTagRepo::new(), MockMediaStore::new());
    let err = service
        .update(&Uuid::new_v4(), EntryUpdate::default(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, VocabError::NotFound(_)));
}

#[tokio::test]
async fn replacing_audio_releases_the_old_asset_only_after_commit() {
    let owner = Uuid::new_v4();
    let mut existing = factories::pending_entry(owner);
    existing.audio = Some(MediaRef::new("audio/old.mp3"));
    let id = existing.id;

    let mut seq = Sequence::new();

    let mut entry_repo = MockEntryRepo::new();
    let for_find = existing.clone();
    entry_repo
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(for_find.clone())));

    let mut media = MockMediaStore::new();
    media
        .expect_store()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(MediaRef::new("audio/new.mp3")));

    let for_apply = existing.clone();
    entry_repo
        .expect_apply()
        .withf(|_, change| {
            matches!(
                change,
                EntryChange::Patch(patch)
                    if patch.audio == Some(Some(MediaRef::new("audio/new.mp3")))
            )
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_, change| {
            let before = for_apply.clone();
            let mut after = before.clone();
            after.apply(&change);
            Ok(EntryMutation { before, after })
        });

    // The superseded ref goes only once the new one is committed.
    media
        .expect_release()
        .withf(|media_ref| media_ref.as_str() == "audio/old.mp3")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let service = service(entry_repo, MockTagRepo::new(), media);
    let update = EntryUpdate {
        audio: MediaChange::Replace(upload("mp3")),
        ..Default::default()
    };

    let updated = service.update(&id, update, owner).await.unwrap();
    assert_eq!(updated.audio, Some(MediaRef::new("audio/new.mp3")));
}

#[tokio::test]
async fn failed_commit_releases_the_replacement_not_the_original() {
    let owner = Uuid::new_v4();
    let mut existing = factories::pending_entry(owner);
    existing.audio = Some(MediaRef::new("audio/old.mp3"));
    let id = existing.id;

    let mut entry_repo = MockEntryRepo::new();
    let for_find = existing.clone();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(for_find.clone())));
    entry_repo
        .expect_apply()
        .times(1)
        .returning(|_, _| Err(VocabError::DatabaseError("commit failed".to_string())));

    let mut media = MockMediaStore::new();
    media
        .expect_store()
        .times(1)
        .returning(|_, _, _| Ok(MediaRef::new("audio/new.mp3")));
    // Only the never-committed replacement may be released.
    media
        .expect_release()
        .withf(|media_ref| media_ref.as_str() == "audio/new.mp3")
        .times(1)
        .returning(|_| Ok(()));

    let service = service(entry_repo, MockTagRepo::new(), media);
    let update = EntryUpdate {
        audio: MediaChange::Replace(upload("mp3")),
        ..Default::default()
    };

    let err = service.update(&id, update, owner).await.unwrap_err();
    assert!(matches!(err, VocabError::DatabaseError(_)));
}

#[tokio::test]
async fn clearing_an_image_releases_it_after_commit() {
    let owner = Uuid::new_v4();
    let mut existing = factories::pending_entry(owner);
    existing.image = Some(MediaRef::new("images/photo.png"));
    let id = existing.id;

    let mut entry_repo = MockEntryRepo::new();
    let for_find = existing.clone();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(for_find.clone())));
    let for_apply = existing.clone();
    entry_repo.expect_apply().times(1).returning(move |_, change| {
        let before = for_apply.clone();
        let mut after = before.clone();
        after.apply(&change);
        Ok(EntryMutation { before, after })
    });

    let mut media = MockMediaStore::new();
    media
        .expect_release()
        .withf(|media_ref| media_ref.as_str() == "images/photo.png")
        .times(1)
        .returning(|_| Ok(()));

    let service = service(entry_repo, MockTagRepo::new(), media);
    let update = EntryUpdate {
        image: MediaChange::Clear,
        ..Default::default()
    };

    let updated = service.update(&id, update, owner).await.unwrap();
    assert!(updated.image.is_none());
}

#[tokio::test]
async fn delete_removes_the_record_then_reports_unreleasable_media() {
    let owner = Uuid::new_v4();
    let entry = factories::entry_with_media(owner, "audio/word.mp3", "images/word.png");
    let id = entry.id;

    let mut seq = Sequence::new();

    let mut entry_repo = MockEntryRepo::new();
    let for_find = entry.clone();
    entry_repo
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(for_find.clone())));
    entry_repo
        .expect_delete()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let mut media = MockMediaStore::new();
    media
        .expect_release()
        .withf(|media_ref| media_ref.as_str() == "audio/word.mp3")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    media
        .expect_release()
        .withf(|media_ref| media_ref.as_str() == "images/word.png")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|media_ref| Err(VocabError::ReleaseFailed(media_ref.to_string())));

    let service = service(entry_repo, MockTagRepo::new(), media);
    let cleanup = service.delete(&id, owner).await.unwrap();

    assert_eq!(cleanup.orphaned, vec![MediaRef::new("images/word.png")]);
}

#[tokio::test]
async fn only_the_owner_can_delete() {
    let entry = factories::pending_entry(Uuid::new_v4());
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));
    entry_repo.expect_delete().times(0);

    let service = service(entry_repo, MockTagRepo::new(), MockMediaStore::new());
    let err = service.delete(&id, Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, VocabError::Forbidden(_)));
}

#[tokio::test]
async fn admin_delete_skips_the_ownership_check() {
    let entry = factories::pending_entry(Uuid::new_v4());
    let id = entry.id;

    let mut entry_repo = MockEntryRepo::new();
    entry_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(entry.clone())));
    entry_repo.expect_delete().times(1).returning(|_| Ok(()));

    let service = service(entry_repo, MockTagRepo::new(), MockMediaStore::new());
    let cleanup = service.admin_delete(&id).await.unwrap();

    assert!(cleanup.orphaned.is_empty());
}
