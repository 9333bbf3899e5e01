use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text, Timestamptz, Uuid as SqlUuid};
use tokio::task;
use uuid::Uuid;

use crate::modules::taxonomy::domain::{
    Category, CategoryListing, CategoryRepository,
};
use crate::modules::taxonomy::infrastructure::models::{CategoryRow, NewCategory};
use crate::schema::categories;
use crate::shared::errors::VocabResult;
use crate::shared::Database;

pub struct CategoryRepositoryImpl {
    db: Arc<Database>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Row shape for the grouped browse query.
#[derive(QueryableByName, Debug)]
struct CategoryCountRow {
    #[diesel(sql_type = SqlUuid)]
    id: Uuid,
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    slug: String,
    #[diesel(sql_type = Nullable<Text>)]
    description: Option<String>,
    #[diesel(sql_type = Timestamptz)]
    created_at: DateTime<Utc>,
    #[diesel(sql_type = BigInt)]
    approved_entries: i64,
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn insert(&self, category: &Category) -> VocabResult<Category> {
        let db = Arc::clone(&self.db);
        let new_row = NewCategory::from(category);

        let row = task::spawn_blocking(move || -> VocabResult<CategoryRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(categories::table)
                .values(&new_row)
                .get_result::<CategoryRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(Category::from(row))
    }

    async fn find_by_id(&self, id: &Uuid) -> VocabResult<Option<Category>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let row = task::spawn_blocking(move || -> VocabResult<Option<CategoryRow>> {
            let mut conn = db.get_connection()?;
            let row = categories::table
                .filter(categories::id.eq(id))
                .first::<CategoryRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Category::from))
    }

    async fn find_by_slug(&self, slug: &str) -> VocabResult<Option<Category>> {
        let db = Arc::clone(&self.db);
        let slug = slug.to_string();

        let row = task::spawn_blocking(move || -> VocabResult<Option<CategoryRow>> {
            let mut conn = db.get_connection()?;
            let row = categories::table
                .filter(categories::slug.eq(&slug))
                .first::<CategoryRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Category::from))
    }

    async fn list_with_counts(&self) -> VocabResult<Vec<CategoryListing>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> VocabResult<Vec<CategoryCountRow>> {
            let mut conn = db.get_connection()?;
            // Inner join: categories without approved entries are omitted.
            let rows = diesel::sql_query(
                "SELECT c.id, c.name, c.slug, c.description, c.created_at, \
                        COUNT(e.id) AS approved_entries \
                 FROM categories c \
                 JOIN entries e ON e.category_id = c.id AND e.status = 'approved' \
                 GROUP BY c.id, c.name, c.slug, c.description, c.created_at \
                 ORDER BY c.name",
            )
            .load::<CategoryCountRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(|row| CategoryListing {
                category: Category {
                    id: row.id,
                    name: row.name,
                    slug: row.slug,
                    description: row.description,
                    created_at: row.created_at,
                },
                approved_entries: row.approved_entries,
            })
            .collect())
    }

    async fn delete(&self, id: &Uuid) -> VocabResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> VocabResult<()> {
            let mut conn = db.get_connection()?;
            // Referencing entries are detached by the FK's ON DELETE SET NULL.
            diesel::delete(categories::table.filter(categories::id.eq(id)))
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}
