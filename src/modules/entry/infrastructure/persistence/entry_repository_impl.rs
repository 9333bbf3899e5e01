use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use tokio::task;
use uuid::Uuid;

use crate::modules::entry::domain::{
    ContributionStats, EntryChange, EntryMutation, EntryRepository, ReviewStatus, VocabEntry,
};
use crate::modules::entry::infrastructure::models::{
    changeset_from_entity, entry_from_row, new_row_from_entity, EntryRow, EntryTagLink,
};
use crate::modules::taxonomy::domain::Tag;
use crate::modules::taxonomy::infrastructure::models::TagRow;
use crate::schema::{entries, entry_tags, tags};
use crate::shared::errors::{VocabError, VocabResult};
use crate::shared::Database;

pub struct EntryRepositoryImpl {
    db: Arc<Database>,
}

impl EntryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Batch-load the tag sets for a group of entries in one query.
pub fn load_tag_map(
    conn: &mut PgConnection,
    entry_ids: &[Uuid],
) -> VocabResult<HashMap<Uuid, Vec<Tag>>> {
    if entry_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(EntryTagLink, TagRow)> = entry_tags::table
        .inner_join(tags::table)
        .filter(entry_tags::entry_id.eq_any(entry_ids))
        .order(tags::name.asc())
        .load(conn)?;

    let mut map: HashMap<Uuid, Vec<Tag>> = HashMap::new();
    for (link, tag_row) in rows {
        map.entry(link.entry_id).or_default().push(Tag::from(tag_row));
    }
    Ok(map)
}

fn replace_tag_links(conn: &mut PgConnection, entry_id: Uuid, tags: &[Tag]) -> VocabResult<()> {
    diesel::delete(entry_tags::table.filter(entry_tags::entry_id.eq(entry_id)))
        .execute(conn)?;

    let links: Vec<EntryTagLink> = tags
        .iter()
        .map(|tag| EntryTagLink {
            entry_id,
            tag_id: tag.id,
        })
        .collect();
    if !links.is_empty() {
        diesel::insert_into(entry_tags::table)
            .values(&links)
            .execute(conn)?;
    }
    Ok(())
}

#[async_trait]
impl EntryRepository for EntryRepositoryImpl {
    async fn insert(&self, entry: &VocabEntry) -> VocabResult<VocabEntry> {
        let db = Arc::clone(&self.db);
        let new_row = new_row_from_entity(entry);
        let tag_set = entry.tags.clone();
        let word = entry.word.clone();
        let language = entry.language;

        let row = task::spawn_blocking(move || -> VocabResult<EntryRow> {
            let mut conn = db.get_connection()?;

            conn.transaction::<EntryRow, VocabError, _>(|conn| {
                let row = diesel::insert_into(entries::table)
                    .values(&new_row)
                    .get_result::<EntryRow>(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::DatabaseError(
                            DatabaseErrorKind::UniqueViolation,
                            _,
                        ) => VocabError::DuplicateEntry(format!(
                            "'{}' has already been submitted for {}",
                            word, language
                        )),
                        other => VocabError::from(other),
                    })?;

                replace_tag_links(conn, row.id, &tag_set)?;
                Ok(row)
            })
        })
        .await??;

        Ok(entry_from_row(row, entry.tags.clone()))
    }

    async fn find_by_id(&self, id: &Uuid) -> VocabResult<Option<VocabEntry>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let found = task::spawn_blocking(move || -> VocabResult<Option<VocabEntry>> {
            let mut conn = db.get_connection()?;
            let row = entries::table
                .filter(entries::id.eq(id))
                .first::<EntryRow>(&mut conn)
                .optional()?;

            match row {
                Some(row) => {
                    let mut tag_map = load_tag_map(&mut conn, &[id])?;
                    let tags = tag_map.remove(&id).unwrap_or_default();
                    Ok(Some(entry_from_row(row, tags)))
                }
                None => Ok(None),
            }
        })
        .await??;

        Ok(found)
    }

    async fn apply(&self, id: &Uuid, change: EntryChange) -> VocabResult<EntryMutation> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let mutation = task::spawn_blocking(move || -> VocabResult<EntryMutation> {
            let mut conn = db.get_connection()?;

            conn.transaction::<EntryMutation, VocabError, _>(|conn| {
                // Row lock: concurrent mutations of the same entry serialize
                // here, so an owner edit and a reviewer action cannot
                // interleave.
                let row = entries::table
                    .filter(entries::id.eq(id))
                    .for_update()
                    .first::<EntryRow>(conn)
                    .optional()?
                    .ok_or_else(|| VocabError::NotFound(format!("Entry {} not found", id)))?;

                let mut tag_map = load_tag_map(conn, &[id])?;
                let before = entry_from_row(row, tag_map.remove(&id).unwrap_or_default());

                let mut after = before.clone();
                after.apply(&change);

                diesel::update(entries::table.filter(entries::id.eq(id)))
                    .set(changeset_from_entity(&after))
                    .execute(conn)?;

                let replace_tags =
                    matches!(&change, EntryChange::Patch(patch) if patch.tags.is_some());
                if replace_tags {
                    replace_tag_links(conn, id, &after.tags)?;
                }

                Ok(EntryMutation { before, after })
            })
        })
        .await??;

        Ok(mutation)
    }

    async fn delete(&self, id: &Uuid) -> VocabResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> VocabResult<()> {
            let mut conn = db.get_connection()?;
            // Tag links, favorites and comments cascade with the row.
            let affected = diesel::delete(entries::table.filter(entries::id.eq(id)))
                .execute(&mut conn)?;
            if affected == 0 {
                return Err(VocabError::NotFound(format!("Entry {} not found", id)));
            }
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn stats_for_owner(&self, owner_id: &Uuid) -> VocabResult<ContributionStats> {
        let db = Arc::clone(&self.db);
        let owner_id = *owner_id;

        let counts = task::spawn_blocking(move || -> VocabResult<Vec<(ReviewStatus, i64)>> {
            let mut conn = db.get_connection()?;
            let counts = entries::table
                .filter(entries::owner_id.eq(owner_id))
                .group_by(entries::status)
                .select((entries::status, diesel::dsl::count_star()))
                .load::<(ReviewStatus, i64)>(&mut conn)?;
            Ok(counts)
        })
        .await??;

        let mut stats = ContributionStats::default();
        for (status, count) in counts {
            stats.total += count;
            match status {
                ReviewStatus::Pending => stats.pending = count,
                ReviewStatus::Approved => stats.approved = count,
                ReviewStatus::Rejected => stats.rejected = count,
            }
        }
        Ok(stats)
    }
}
