pub mod engine;
pub mod modules;
mod schema;
pub mod shared;

pub use engine::VocabEngine;
pub use shared::errors::{VocabError, VocabResult};
