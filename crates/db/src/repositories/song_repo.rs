//! Repository for the `songs` table.
//!
//! Songs are addressed by `(group name, song name)`, so most queries join
//! `groups` instead of taking a numeric id.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use songlib_core::filter::SongFilter;
use songlib_core::song::SongDetail;
use songlib_core::types::DbId;

use crate::models::song::{Song, SongDetailRow, SongListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, group_id, name, release_date, text, link, created_at, updated_at";

/// Projection used by catalog listing.
const LIST_COLUMNS: &str =
    "g.name AS group_name, s.name AS song_name, s.release_date, s.text, s.link";

/// Provides CRUD and filtered listing for songs.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song with an empty detail, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        group_id: DbId,
        name: &str,
    ) -> Result<Song, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (group_id, name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(group_id)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find the detail of a song by group and song name.
    pub async fn find_detail(
        pool: &PgPool,
        group: &str,
        song: &str,
    ) -> Result<Option<SongDetailRow>, sqlx::Error> {
        sqlx::query_as::<_, SongDetailRow>(
            "SELECT s.release_date, s.text, s.link \
             FROM songs s \
             JOIN groups g ON s.group_id = g.id \
             WHERE g.name = $1 AND s.name = $2",
        )
        .bind(group)
        .bind(song)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite the detail of a song. Returns `true` if a row was updated.
    pub async fn update_detail(
        pool: &PgPool,
        group: &str,
        song: &str,
        detail: &SongDetail,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE songs SET \
                release_date = $1, \
                text = $2, \
                link = $3, \
                updated_at = NOW() \
             FROM groups \
             WHERE songs.group_id = groups.id \
               AND groups.name = $4 \
               AND songs.name = $5",
        )
        .bind(detail.release_date)
        .bind(&detail.text)
        .bind(&detail.link)
        .bind(group)
        .bind(song)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a song by group and song name, returning its id if it existed.
    pub async fn delete(
        pool: &PgPool,
        group: &str,
        song: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "DELETE FROM songs \
             WHERE name = $1 \
               AND group_id IN (SELECT id FROM groups WHERE name = $2) \
             RETURNING id",
        )
        .bind(song)
        .bind(group)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(id,)| id))
    }

    /// List songs matching `filter`, ordered by song id.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &SongFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SongListRow>, sqlx::Error> {
        let (query, bind_values) = build_list_query(filter);

        let mut q = sqlx::query_as::<_, SongListRow>(&query);
        for val in &bind_values {
            q = match val {
                BindValue::Text(v) => q.bind(v.as_str()),
                BindValue::Date(v) => q.bind(*v),
            };
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }
}

// ---------------------------------------------------------------------------
// Filter building
// ---------------------------------------------------------------------------

/// A filter value to bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BindValue {
    Text(String),
    Date(NaiveDate),
}

/// Build the WHERE clause for a song filter.
///
/// Conditions are added in a fixed order (group, song, release date), each
/// with its own positional placeholder. Returns
/// `(where_clause, bind_values, next_bind_index)`; the clause is empty when
/// no filter field is set, or starts with `WHERE `.
fn build_song_filter(filter: &SongFilter) -> (String, Vec<BindValue>, usize) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx: usize = 1;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref group) = filter.group {
        conditions.push(format!("g.name = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(group.clone()));
    }

    if let Some(ref song) = filter.song {
        conditions.push(format!("s.name = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(song.clone()));
    }

    if let Some(release_date) = filter.release_date {
        conditions.push(format!("s.release_date = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Date(release_date));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Build the full listing query. `LIMIT` and `OFFSET` take the two
/// placeholders after the filter values.
fn build_list_query(filter: &SongFilter) -> (String, Vec<BindValue>) {
    let (where_clause, bind_values, bind_idx) = build_song_filter(filter);
    let query = format!(
        "SELECT {LIST_COLUMNS} \
         FROM songs s \
         JOIN groups g ON s.group_id = g.id \
         {where_clause} \
         ORDER BY s.id \
         LIMIT ${bind_idx} OFFSET ${}",
        bind_idx + 1
    );
    (query, bind_values)
}
