use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::taxonomy::domain::{Tag, TagRepository};
use crate::modules::taxonomy::infrastructure::models::{NewTag, TagRow};
use crate::schema::tags;
use crate::shared::errors::VocabResult;
use crate::shared::Database;

pub struct TagRepositoryImpl {
    db: Arc<Database>,
}

impl TagRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryImpl {
    async fn get_or_create_many(&self, names: &[String]) -> VocabResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let names = names.to_vec();

        let rows = task::spawn_blocking(move || -> VocabResult<Vec<TagRow>> {
            let mut conn = db.get_connection()?;

            let new_rows: Vec<NewTag> = names
                .iter()
                .map(|name| NewTag::from(&Tag::new(name.clone())))
                .collect();

            // Existing names are left untouched; the re-select below picks up
            // whichever record won, ours or a concurrent writer's.
            diesel::insert_into(tags::table)
                .values(&new_rows)
                .on_conflict(tags::name)
                .do_nothing()
                .execute(&mut conn)?;

            let rows = tags::table
                .filter(tags::name.eq_any(&names))
                .order(tags::name.asc())
                .load::<TagRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> VocabResult<Option<Tag>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        let row = task::spawn_blocking(move || -> VocabResult<Option<TagRow>> {
            let mut conn = db.get_connection()?;
            let row = tags::table
                .filter(tags::name.eq(&name))
                .first::<TagRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Tag::from))
    }

    async fn get_all(&self) -> VocabResult<Vec<Tag>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> VocabResult<Vec<TagRow>> {
            let mut conn = db.get_connection()?;
            let rows = tags::table.order(tags::name.asc()).load::<TagRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Tag::from).collect())
    }
}
