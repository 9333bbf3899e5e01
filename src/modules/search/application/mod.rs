pub mod query;
pub mod service;
pub mod view_tracker;

pub use query::{EntryFilter, SortOrder, Viewer};
pub use service::SearchService;
pub use view_tracker::ViewTracker;
