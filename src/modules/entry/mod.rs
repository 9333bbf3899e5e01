pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::dto::{EntryDraft, EntryUpdate, MediaChange, MediaCleanup, MediaUpload};
pub use application::service::EntryService;
pub use domain::{
    ContributionStats, Difficulty, EntryChange, EntryMutation, EntryPatch, EntryRepository,
    Language, ReviewStatus, VocabEntry,
};
pub use infrastructure::persistence::EntryRepositoryImpl;
