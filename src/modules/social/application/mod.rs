pub mod service;

pub use service::{FavoriteToggle, SocialService};
