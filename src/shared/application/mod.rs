pub mod pagination;

pub use pagination::{PaginatedResult, PaginationParams, PAGE_SIZE};
