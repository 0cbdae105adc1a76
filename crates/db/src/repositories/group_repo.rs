//! Repository for the `groups` table.

use sqlx::{Connection, PgConnection, PgPool};
use songlib_core::types::DbId;

use super::{is_unique_violation, UQ_GROUPS_NAME};
use crate::models::group::Group;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides lookup, creation and cleanup of groups.
pub struct GroupRepo;

impl GroupRepo {
    /// Find a group by its unique name.
    pub async fn find_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE name = $1");
        sqlx::query_as::<_, Group>(&query)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Insert a new group, returning the created row.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<Group, sqlx::Error> {
        let query = format!("INSERT INTO groups (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Group>(&query)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Return the id of the named group, creating the group if absent.
    ///
    /// Lookup-then-insert. The insert runs under a savepoint so that a
    /// concurrent creator winning the `uq_groups_name` race only rolls back
    /// the savepoint; the lookup is then retried once.
    pub async fn resolve_or_create(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        if let Some(group) = Self::find_by_name(conn, name).await? {
            return Ok(group.id);
        }

        let mut savepoint = conn.begin().await?;
        match Self::create(&mut savepoint, name).await {
            Ok(group) => {
                savepoint.commit().await?;
                tracing::debug!(group = %name, group_id = group.id, "Group created");
                Ok(group.id)
            }
            Err(err) if is_unique_violation(&err, UQ_GROUPS_NAME) => {
                savepoint.rollback().await?;
                tracing::debug!(group = %name, "Group created concurrently, re-reading");
                Self::find_by_name(conn, name)
                    .await?
                    .map(|group| group.id)
                    .ok_or(sqlx::Error::RowNotFound)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete a group by name. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while the group still has songs.
    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM groups WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
