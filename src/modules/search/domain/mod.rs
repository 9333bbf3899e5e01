pub mod repositories;

pub use repositories::EntryQueryRepository;
