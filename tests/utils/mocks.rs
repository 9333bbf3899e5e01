use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use kiugo::modules::entry::domain::{
    ContributionStats, EntryChange, EntryMutation, EntryRepository, VocabEntry,
};
use kiugo::modules::media::domain::{MediaKind, MediaRef, MediaStore};
use kiugo::modules::search::application::query::{EntryFilter, SortOrder, Viewer};
use kiugo::modules::search::domain::EntryQueryRepository;
use kiugo::modules::social::domain::{Comment, SocialRepository};
use kiugo::modules::taxonomy::domain::{Tag, TagRepository};
use kiugo::shared::application::PaginationParams;
use kiugo::shared::errors::VocabResult;

mock! {
    pub EntryRepo {}

    #[async_trait]
    impl EntryRepository for EntryRepo {
        async fn insert(&self, entry: &VocabEntry) -> VocabResult<VocabEntry>;
        async fn find_by_id(&self, id: &Uuid) -> VocabResult<Option<VocabEntry>>;
        async fn apply(&self, id: &Uuid, change: EntryChange) -> VocabResult<EntryMutation>;
        async fn delete(&self, id: &Uuid) -> VocabResult<()>;
        async fn stats_for_owner(&self, owner_id: &Uuid) -> VocabResult<ContributionStats>;
    }
}

mock! {
    pub MediaStore {}

    #[async_trait]
    impl MediaStore for MediaStore {
        async fn store(&self, kind: MediaKind, bytes: &[u8], format: &str) -> VocabResult<MediaRef>;
        async fn release(&self, media_ref: &MediaRef) -> VocabResult<()>;
    }
}

mock! {
    pub TagRepo {}

    #[async_trait]
    impl TagRepository for TagRepo {
        async fn get_or_create_many(&self, names: &[String]) -> VocabResult<Vec<Tag>>;
        async fn find_by_name(&self, name: &str) -> VocabResult<Option<Tag>>;
        async fn get_all(&self) -> VocabResult<Vec<Tag>>;
    }
}

mock! {
    pub QueryRepo {}

    #[async_trait]
    impl EntryQueryRepository for QueryRepo {
        async fn count(&self, filter: &EntryFilter, viewer: &Viewer) -> VocabResult<u64>;
        async fn page(
            &self,
            filter: &EntryFilter,
            viewer: &Viewer,
            sort: SortOrder,
            pagination: &PaginationParams,
        ) -> VocabResult<Vec<VocabEntry>>;
        async fn find_visible(&self, id: &Uuid, viewer: &Viewer) -> VocabResult<Option<VocabEntry>>;
        async fn record_view(&self, id: &Uuid) -> VocabResult<i32>;
        async fn related(
            &self,
            category_id: &Uuid,
            exclude: &Uuid,
            limit: i64,
        ) -> VocabResult<Vec<VocabEntry>>;
        async fn list_for_owner(
            &self,
            owner_id: &Uuid,
            pagination: &PaginationParams,
        ) -> VocabResult<(Vec<VocabEntry>, u64)>;
        async fn approved_total(&self) -> VocabResult<u64>;
    }
}

mock! {
    pub SocialRepo {}

    #[async_trait]
    impl SocialRepository for SocialRepo {
        async fn toggle_favorite(&self, entry_id: &Uuid, user_id: &Uuid) -> VocabResult<bool>;
        async fn is_favorited(&self, entry_id: &Uuid, user_id: &Uuid) -> VocabResult<bool>;
        async fn favorite_count(&self, entry_id: &Uuid) -> VocabResult<i64>;
        async fn insert_comment(&self, comment: &Comment) -> VocabResult<Comment>;
        async fn comments_for_entry(&self, entry_id: &Uuid) -> VocabResult<Vec<Comment>>;
        async fn comment_count(&self, entry_id: &Uuid) -> VocabResult<i64>;
        async fn set_comment_flag(&self, comment_id: &Uuid, flagged: bool) -> VocabResult<Comment>;
    }
}
