pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::registry::TagRegistry;
pub use application::service::CategoryService;
pub use domain::{Category, CategoryListing, CategoryRepository, Tag, TagRepository};
pub use infrastructure::{CategoryRepositoryImpl, TagRepositoryImpl};
