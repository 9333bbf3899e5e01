use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::social::domain::{Comment, SocialRepository};
use crate::modules::social::infrastructure::models::{CommentRow, FavoriteRow, NewComment};
use crate::schema::{comments, entry_favorites};
use crate::shared::errors::{VocabError, VocabResult};
use crate::shared::Database;

pub struct SocialRepositoryImpl {
    db: Arc<Database>,
}

impl SocialRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocialRepository for SocialRepositoryImpl {
    async fn toggle_favorite(&self, entry_id: &Uuid, user_id: &Uuid) -> VocabResult<bool> {
        let db = Arc::clone(&self.db);
        let entry_id = *entry_id;
        let user_id = *user_id;

        let favorited = task::spawn_blocking(move || -> VocabResult<bool> {
            let mut conn = db.get_connection()?;

            conn.transaction::<bool, VocabError, _>(|conn| {
                // Insert-or-nothing decides the flip direction atomically:
                // a hit means we just favorited, a miss means the row was
                // already there and the toggle removes it.
                let inserted = diesel::insert_into(entry_favorites::table)
                    .values(&FavoriteRow {
                        entry_id,
                        user_id,
                        created_at: Utc::now(),
                    })
                    .on_conflict((entry_favorites::entry_id, entry_favorites::user_id))
                    .do_nothing()
                    .execute(conn)?;

                if inserted == 0 {
                    diesel::delete(entry_favorites::table.find((entry_id, user_id)))
                        .execute(conn)?;
                    Ok(false)
                } else {
                    Ok(true)
                }
            })
        })
        .await??;

        Ok(favorited)
    }

    async fn is_favorited(&self, entry_id: &Uuid, user_id: &Uuid) -> VocabResult<bool> {
        let db = Arc::clone(&self.db);
        let entry_id = *entry_id;
        let user_id = *user_id;

        let found = task::spawn_blocking(move || -> VocabResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(
                entry_favorites::table.find((entry_id, user_id)),
            ))
            .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await??;

        Ok(found)
    }

    async fn favorite_count(&self, entry_id: &Uuid) -> VocabResult<i64> {
        let db = Arc::clone(&self.db);
        let entry_id = *entry_id;

        let count = task::spawn_blocking(move || -> VocabResult<i64> {
            let mut conn = db.get_connection()?;
            let count = entry_favorites::table
                .filter(entry_favorites::entry_id.eq(entry_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await??;

        Ok(count)
    }

    async fn insert_comment(&self, comment: &Comment) -> VocabResult<Comment> {
        let db = Arc::clone(&self.db);
        let new_row = NewComment::from(comment);

        let row = task::spawn_blocking(move || -> VocabResult<CommentRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(comments::table)
                .values(&new_row)
                .get_result::<CommentRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(Comment::from(row))
    }

    async fn comments_for_entry(&self, entry_id: &Uuid) -> VocabResult<Vec<Comment>> {
        let db = Arc::clone(&self.db);
        let entry_id = *entry_id;

        let rows = task::spawn_blocking(move || -> VocabResult<Vec<CommentRow>> {
            let mut conn = db.get_connection()?;
            let rows = comments::table
                .filter(comments::entry_id.eq(entry_id))
                .order(comments::created_at.desc())
                .load::<CommentRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn comment_count(&self, entry_id: &Uuid) -> VocabResult<i64> {
        let db = Arc::clone(&self.db);
        let entry_id = *entry_id;

        let count = task::spawn_blocking(move || -> VocabResult<i64> {
            let mut conn = db.get_connection()?;
            let count = comments::table
                .filter(comments::entry_id.eq(entry_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await??;

        Ok(count)
    }

    async fn set_comment_flag(&self, comment_id: &Uuid, flagged: bool) -> VocabResult<Comment> {
        let db = Arc::clone(&self.db);
        let comment_id = *comment_id;

        let row = task::spawn_blocking(move || -> VocabResult<CommentRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::update(comments::table.filter(comments::id.eq(comment_id)))
                .set(comments::is_flagged.eq(flagged))
                .get_result::<CommentRow>(&mut conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => {
                        VocabError::NotFound(format!("Comment {} not found", comment_id))
                    }
                    other => VocabError::from(other),
                })?;
            Ok(row)
        })
        .await??;

        Ok(Comment::from(row))
    }
}
