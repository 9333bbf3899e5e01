pub mod category_repository_impl;
pub mod tag_repository_impl;

pub use category_repository_impl::CategoryRepositoryImpl;
pub use tag_repository_impl::TagRepositoryImpl;
