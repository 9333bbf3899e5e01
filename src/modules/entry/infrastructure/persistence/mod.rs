pub mod entry_repository_impl;

pub use entry_repository_impl::{load_tag_map, EntryRepositoryImpl};
