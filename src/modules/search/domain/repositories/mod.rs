pub mod entry_query_repository;

pub use entry_query_repository::EntryQueryRepository;
