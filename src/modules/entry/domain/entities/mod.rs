pub mod entry;

pub use entry::{EntryPatch, VocabEntry};
