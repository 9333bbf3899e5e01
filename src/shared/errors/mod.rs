pub mod vocab_error;

pub use vocab_error::{VocabError, VocabResult};
