pub mod entities;
pub mod repositories;

pub use entities::{Category, CategoryListing, Tag};
pub use repositories::{CategoryRepository, TagRepository};
