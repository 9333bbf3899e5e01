use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::entry::domain::{Difficulty, Language};

/// Who is asking. Anonymous callers see only approved entries; an
/// authenticated caller additionally sees their own, whatever the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    User(Uuid),
}

/// Optional, conjunctive listing filters.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Free text, matched against word, translation, example sentence and
    /// tag names.
    pub query: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub language: Option<Language>,
}

impl EntryFilter {
    /// Drop an all-whitespace query so it does not constrain the listing.
    pub fn normalized(mut self) -> Self {
        self.query = self
            .query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        self.category = self.category.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.language.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Popular,
    Alphabetical,
}

impl From<&str> for SortOrder {
    /// Unrecognized sort tokens fall back to the default ordering.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "oldest" => SortOrder::Oldest,
            "popular" => SortOrder::Popular,
            "alphabetical" => SortOrder::Alphabetical,
            _ => SortOrder::Newest,
        }
    }
}

impl From<String> for SortOrder {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_tokens_fall_back_to_newest() {
        assert_eq!(SortOrder::from("popular"), SortOrder::Popular);
        assert_eq!(SortOrder::from("OLDEST"), SortOrder::Oldest);
        assert_eq!(SortOrder::from("alphabetical"), SortOrder::Alphabetical);
        assert_eq!(SortOrder::from("view_count"), SortOrder::Newest);
        assert_eq!(SortOrder::from(""), SortOrder::Newest);
    }

    #[test]
    fn blank_query_is_normalized_away() {
        let filter = EntryFilter {
            query: Some("   ".to_string()),
            ..Default::default()
        }
        .normalized();
        assert!(filter.query.is_none());
        assert!(filter.is_empty());
    }

    #[test]
    fn query_text_is_trimmed() {
        let filter = EntryFilter {
            query: Some("  mwega ".to_string()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(filter.query.as_deref(), Some("mwega"));
    }
}
