pub mod persistence;

pub use persistence::EntryQueryRepositoryImpl;
