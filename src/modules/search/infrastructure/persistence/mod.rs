pub mod entry_query_repository_impl;

pub use entry_query_repository_impl::EntryQueryRepositoryImpl;
