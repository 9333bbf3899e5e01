pub mod social_repository_impl;

pub use social_repository_impl::SocialRepositoryImpl;
