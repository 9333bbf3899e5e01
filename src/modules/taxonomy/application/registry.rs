use std::collections::BTreeSet;
use std::sync::Arc;

use crate::modules::taxonomy::domain::{Tag, TagRepository};
use crate::shared::errors::VocabResult;
use crate::shared::utils::Validator;

/// The single place free-text tag input becomes canonical tag records.
/// Everything that attaches tags to an entry goes through `resolve`.
pub struct TagRegistry {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagRegistry {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    /// Normalize raw names (trim, lowercase, drop empties, dedup) and
    /// get-or-create each distinct survivor. Input order never affects the
    /// result: the set comes back in name order.
    pub async fn resolve(&self, raw_names: &[String]) -> VocabResult<Vec<Tag>> {
        let normalized = Self::normalize_all(raw_names);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }
        for name in &normalized {
            Validator::validate_tag_name(name)?;
        }
        self.tag_repo.get_or_create_many(&normalized).await
    }

    pub async fn all_tags(&self) -> VocabResult<Vec<Tag>> {
        self.tag_repo.get_all().await
    }

    fn normalize_all(raw_names: &[String]) -> Vec<String> {
        raw_names
            .iter()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
