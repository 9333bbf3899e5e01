pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{EntryPatch, VocabEntry};
pub use repositories::{ContributionStats, EntryChange, EntryMutation, EntryRepository};
pub use value_objects::{Difficulty, Language, ReviewStatus};
