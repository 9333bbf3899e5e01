pub mod category_repository;
pub mod tag_repository;

pub use category_repository::CategoryRepository;
pub use tag_repository::TagRepository;
