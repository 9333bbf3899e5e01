pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{MediaKind, MediaRef, MediaStore};
pub use infrastructure::FsMediaStore;
