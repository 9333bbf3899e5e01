use crate::schema::{comments, entry_favorites};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::social::domain::Comment;

// ============= FAVORITE ASSOCIATION =============

#[derive(Queryable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = entry_favorites)]
#[diesel(primary_key(entry_id, user_id))]
pub struct FavoriteRow {
    pub entry_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// ============= COMMENT MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = comments)]
pub struct CommentRow {
    pub id: Uuid,
    pub entry_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub is_flagged: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = comments)]
pub struct NewComment {
    pub id: Uuid,
    pub entry_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub is_flagged: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            entry_id: row.entry_id,
            author_id: row.author_id,
            content: row.content,
            is_flagged: row.is_flagged,
            created_at: row.created_at,
        }
    }
}

impl From<&Comment> for NewComment {
    fn from(comment: &Comment) -> Self {
        NewComment {
            id: comment.id,
            entry_id: comment.entry_id,
            author_id: comment.author_id,
            content: comment.content.clone(),
            is_flagged: comment.is_flagged,
            created_at: comment.created_at,
        }
    }
}
