pub mod dto;
pub mod service;

pub use dto::{EntryDraft, EntryUpdate, MediaChange, MediaCleanup, MediaUpload};
pub use service::EntryService;
