use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use tokio::task;
use uuid::Uuid;

use crate::modules::entry::domain::{ReviewStatus, VocabEntry};
use crate::modules::entry::infrastructure::models::{entry_from_row, EntryRow};
use crate::modules::entry::infrastructure::persistence::load_tag_map;
use crate::modules::search::application::query::{EntryFilter, SortOrder, Viewer};
use crate::modules::search::domain::EntryQueryRepository;
use crate::schema::entries;
use crate::shared::application::PaginationParams;
use crate::shared::errors::VocabResult;
use crate::shared::Database;

pub struct EntryQueryRepositoryImpl {
    db: Arc<Database>,
}

impl EntryQueryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Escape LIKE wildcards in user text so it matches literally.
fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build the filtered base query: visibility scope plus the optional
/// conjunctive filters. Free text matches word, translation, example
/// sentence and tag names; the tag match uses EXISTS so an entry hitting
/// several of its tags still appears once.
fn filtered(filter: &EntryFilter, viewer: &Viewer) -> entries::BoxedQuery<'static, Pg> {
    let mut q = entries::table.into_boxed();

    q = match viewer {
        Viewer::Anonymous => q.filter(entries::status.eq(ReviewStatus::Approved)),
        Viewer::User(user_id) => q.filter(
            entries::status
                .eq(ReviewStatus::Approved)
                .or(entries::owner_id.eq(*user_id)),
        ),
    };

    if let Some(language) = filter.language {
        q = q.filter(entries::language.eq(language));
    }
    if let Some(difficulty) = filter.difficulty {
        q = q.filter(entries::difficulty.eq(difficulty));
    }
    if let Some(slug) = &filter.category {
        let pred = sql::<Bool>("category_id IN (SELECT id FROM categories WHERE slug = ")
            .bind::<Text, _>(slug.clone())
            .sql(")");
        q = q.filter(pred);
    }
    if let Some(query) = &filter.query {
        let pattern = format!("%{}%", escape_like(query));
        let pred = sql::<Bool>("(word ILIKE ")
            .bind::<Text, _>(pattern.clone())
            .sql(" OR translation ILIKE ")
            .bind::<Text, _>(pattern.clone())
            .sql(" OR COALESCE(example_sentence, '') ILIKE ")
            .bind::<Text, _>(pattern.clone())
            .sql(
                " OR EXISTS (SELECT 1 FROM entry_tags et \
                 JOIN tags t ON t.id = et.tag_id \
                 WHERE et.entry_id = entries.id AND t.name ILIKE ",
            )
            .bind::<Text, _>(pattern)
            .sql("))");
        q = q.filter(pred);
    }

    q
}

/// Load the tag sets and assemble entities, preserving row order.
fn rows_to_entities(
    conn: &mut PgConnection,
    rows: Vec<EntryRow>,
) -> VocabResult<Vec<VocabEntry>> {
    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let mut tag_map = load_tag_map(conn, &ids)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let tags = tag_map.remove(&row.id).unwrap_or_default();
            entry_from_row(row, tags)
        })
        .collect())
}

#[async_trait]
impl EntryQueryRepository for EntryQueryRepositoryImpl {
    async fn count(&self, filter: &EntryFilter, viewer: &Viewer) -> VocabResult<u64> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        let viewer = *viewer;

        let total = task::spawn_blocking(move || -> VocabResult<i64> {
            let mut conn = db.get_connection()?;
            let total = filtered(&filter, &viewer)
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(total)
        })
        .await??;

        Ok(total as u64)
    }

    async fn page(
        &self,
        filter: &EntryFilter,
        viewer: &Viewer,
        sort: SortOrder,
        pagination: &PaginationParams,
    ) -> VocabResult<Vec<VocabEntry>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        let viewer = *viewer;
        let pagination = *pagination;

        let entries_page = task::spawn_blocking(move || -> VocabResult<Vec<VocabEntry>> {
            let mut conn = db.get_connection()?;

            let mut q = filtered(&filter, &viewer);
            q = match sort {
                SortOrder::Newest => q.order(entries::created_at.desc()),
                SortOrder::Oldest => q.order(entries::created_at.asc()),
                SortOrder::Popular => {
                    q.order((entries::view_count.desc(), entries::created_at.desc()))
                }
                SortOrder::Alphabetical => q.order(entries::word.asc()),
            };

            let rows = q
                .offset(pagination.offset())
                .limit(pagination.limit())
                .load::<EntryRow>(&mut conn)?;

            rows_to_entities(&mut conn, rows)
        })
        .await??;

        Ok(entries_page)
    }

    async fn find_visible(&self, id: &Uuid, viewer: &Viewer) -> VocabResult<Option<VocabEntry>> {
        let db = Arc::clone(&self.db);
        let id = *id;
        let viewer = *viewer;

        let found = task::spawn_blocking(move || -> VocabResult<Option<VocabEntry>> {
            let mut conn = db.get_connection()?;
            let row = filtered(&EntryFilter::default(), &viewer)
                .filter(entries::id.eq(id))
                .first::<EntryRow>(&mut conn)
                .optional()?;

            match row {
                Some(row) => Ok(rows_to_entities(&mut conn, vec![row])?.into_iter().next()),
                None => Ok(None),
            }
        })
        .await??;

        Ok(found)
    }

    async fn record_view(&self, id: &Uuid) -> VocabResult<i32> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let new_count = task::spawn_blocking(move || -> VocabResult<i32> {
            let mut conn = db.get_connection()?;
            let new_count = diesel::update(entries::table.filter(entries::id.eq(id)))
                .set(entries::view_count.eq(entries::view_count + 1))
                .returning(entries::view_count)
                .get_result::<i32>(&mut conn)?;
            Ok(new_count)
        })
        .await??;

        Ok(new_count)
    }

    async fn related(
        &self,
        category_id: &Uuid,
        exclude: &Uuid,
        limit: i64,
    ) -> VocabResult<Vec<VocabEntry>> {
        let db = Arc::clone(&self.db);
        let category_id = *category_id;
        let exclude = *exclude;

        let found = task::spawn_blocking(move || -> VocabResult<Vec<VocabEntry>> {
            let mut conn = db.get_connection()?;
            let rows = entries::table
                .filter(entries::category_id.eq(category_id))
                .filter(entries::status.eq(ReviewStatus::Approved))
                .filter(entries::id.ne(exclude))
                .order(entries::created_at.desc())
                .limit(limit)
                .load::<EntryRow>(&mut conn)?;

            rows_to_entities(&mut conn, rows)
        })
        .await??;

        Ok(found)
    }

    async fn list_for_owner(
        &self,
        owner_id: &Uuid,
        pagination: &PaginationParams,
    ) -> VocabResult<(Vec<VocabEntry>, u64)> {
        let db = Arc::clone(&self.db);
        let owner_id = *owner_id;
        let pagination = *pagination;

        let listing = task::spawn_blocking(move || -> VocabResult<(Vec<VocabEntry>, u64)> {
            let mut conn = db.get_connection()?;

            let total = entries::table
                .filter(entries::owner_id.eq(owner_id))
                .count()
                .get_result::<i64>(&mut conn)?;

            let rows = entries::table
                .filter(entries::owner_id.eq(owner_id))
                .order(entries::created_at.desc())
                .offset(pagination.offset())
                .limit(pagination.limit())
                .load::<EntryRow>(&mut conn)?;

            Ok((rows_to_entities(&mut conn, rows)?, total as u64))
        })
        .await??;

        Ok(listing)
    }

    async fn approved_total(&self) -> VocabResult<u64> {
        let db = Arc::clone(&self.db);

        let total = task::spawn_blocking(move || -> VocabResult<i64> {
            let mut conn = db.get_connection()?;
            let total = entries::table
                .filter(entries::status.eq(ReviewStatus::Approved))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(total)
        })
        .await??;

        Ok(total as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
