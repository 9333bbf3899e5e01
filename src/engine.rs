use std::env;
use std::sync::Arc;

use crate::modules::entry::application::service::EntryService;
use crate::modules::entry::domain::EntryRepository;
use crate::modules::entry::infrastructure::persistence::EntryRepositoryImpl;
use crate::modules::media::domain::MediaStore;
use crate::modules::media::infrastructure::FsMediaStore;
use crate::modules::review::application::workflow::ApprovalWorkflow;
use crate::modules::search::application::service::SearchService;
use crate::modules::search::application::view_tracker::ViewTracker;
use crate::modules::search::domain::EntryQueryRepository;
use crate::modules::search::infrastructure::EntryQueryRepositoryImpl;
use crate::modules::social::application::service::SocialService;
use crate::modules::social::domain::SocialRepository;
use crate::modules::social::infrastructure::SocialRepositoryImpl;
use crate::modules::taxonomy::application::registry::TagRegistry;
use crate::modules::taxonomy::application::service::CategoryService;
use crate::modules::taxonomy::domain::{CategoryRepository, TagRepository};
use crate::modules::taxonomy::infrastructure::{CategoryRepositoryImpl, TagRepositoryImpl};
use crate::shared::errors::VocabResult;
use crate::shared::Database;

/// The assembled engine: one service handle per component, all sharing the
/// injected database and media store. This is the surface the web layer
/// calls into.
pub struct VocabEngine {
    pub entries: Arc<EntryService>,
    pub reviews: Arc<ApprovalWorkflow>,
    pub tags: Arc<TagRegistry>,
    pub categories: Arc<CategoryService>,
    pub search: Arc<SearchService>,
    pub social: Arc<SocialService>,
}

impl VocabEngine {
    pub fn new(db: Arc<Database>, media_store: Arc<dyn MediaStore>) -> Self {
        // Repositories
        let entry_repo: Arc<dyn EntryRepository> =
            Arc::new(EntryRepositoryImpl::new(Arc::clone(&db)));
        let tag_repo: Arc<dyn TagRepository> = Arc::new(TagRepositoryImpl::new(Arc::clone(&db)));
        let category_repo: Arc<dyn CategoryRepository> =
            Arc::new(CategoryRepositoryImpl::new(Arc::clone(&db)));
        let query_repo: Arc<dyn EntryQueryRepository> =
            Arc::new(EntryQueryRepositoryImpl::new(Arc::clone(&db)));
        let social_repo: Arc<dyn SocialRepository> =
            Arc::new(SocialRepositoryImpl::new(Arc::clone(&db)));

        // Services
        let tags = Arc::new(TagRegistry::new(tag_repo));
        let entries = Arc::new(EntryService::new(
            Arc::clone(&entry_repo),
            Arc::clone(&tags),
            Arc::clone(&media_store),
        ));
        let reviews = Arc::new(ApprovalWorkflow::new(Arc::clone(&entry_repo)));
        let categories = Arc::new(CategoryService::new(category_repo));
        let search = Arc::new(SearchService::new(query_repo, Arc::new(ViewTracker::new())));
        let social = Arc::new(SocialService::new(entry_repo, social_repo));

        Self {
            entries,
            reviews,
            tags,
            categories,
            search,
            social,
        }
    }

    /// Stand the engine up from the environment: `DATABASE_URL` for the
    /// pool (migrations applied), `MEDIA_ROOT` for the filesystem media
    /// store (defaults to `./media`).
    pub fn bootstrap() -> VocabResult<Self> {
        crate::shared::utils::logger::init_logger();

        let db = Arc::new(Database::new()?);
        db.run_migrations()?;

        let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());
        let media_store: Arc<dyn MediaStore> = Arc::new(FsMediaStore::new(media_root)?);

        Ok(Self::new(db, media_store))
    }
}
