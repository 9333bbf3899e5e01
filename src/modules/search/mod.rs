pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::query::{EntryFilter, SortOrder, Viewer};
pub use application::service::SearchService;
pub use application::view_tracker::ViewTracker;
pub use domain::EntryQueryRepository;
pub use infrastructure::EntryQueryRepositoryImpl;
