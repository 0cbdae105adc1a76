//! Group entity model.

use songlib_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `groups` table.
#[derive(Debug, Clone, FromRow)]
pub struct Group {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
