pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{FavoriteToggle, SocialService};
pub use domain::{Comment, SocialRepository};
pub use infrastructure::SocialRepositoryImpl;
