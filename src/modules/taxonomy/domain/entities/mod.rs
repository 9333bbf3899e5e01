pub mod category;
pub mod tag;

pub use category::{Category, CategoryListing};
pub use tag::Tag;
