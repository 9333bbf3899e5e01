pub mod entities;
pub mod repositories;

pub use entities::Comment;
pub use repositories::SocialRepository;
