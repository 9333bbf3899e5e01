use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on an approved entry. Comments never change state; moderation
/// can flag them independently of the entry's review status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub entry_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub is_flagged: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(entry_id: Uuid, author_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_id,
            author_id,
            content,
            is_flagged: false,
            created_at: Utc::now(),
        }
    }
}
