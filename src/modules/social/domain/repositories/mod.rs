pub mod social_repository;

pub use social_repository::SocialRepository;
