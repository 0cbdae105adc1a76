//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods that must run inside a caller's transaction take
//! `&mut PgConnection`; the rest take `&PgPool`.

pub mod group_repo;
pub mod song_repo;

pub use group_repo::GroupRepo;
pub use song_repo::SongRepo;

/// Unique constraint on `groups.name`.
pub const UQ_GROUPS_NAME: &str = "uq_groups_name";

/// Unique constraint on `songs (group_id, name)`.
pub const UQ_SONGS_GROUP_ID_NAME: &str = "uq_songs_group_id_name";

/// Whether `err` is a PostgreSQL unique violation (23505) on `constraint`.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
