//! Song entity model and listing projection.

use chrono::NaiveDate;
use songlib_core::song::{SongDetail, SongWithDetail};
use songlib_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `songs` table.
#[derive(Debug, Clone, FromRow)]
pub struct Song {
    pub id: DbId,
    pub group_id: DbId,
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub text: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The detail columns of a song.
#[derive(Debug, Clone, FromRow)]
pub struct SongDetailRow {
    pub release_date: Option<NaiveDate>,
    pub text: String,
    pub link: String,
}

impl From<SongDetailRow> for SongDetail {
    fn from(row: SongDetailRow) -> Self {
        Self {
            release_date: row.release_date,
            text: row.text,
            link: row.link,
        }
    }
}

/// A song joined with its group name, as produced by catalog listing.
#[derive(Debug, Clone, FromRow)]
pub struct SongListRow {
    pub group_name: String,
    pub song_name: String,
    pub release_date: Option<NaiveDate>,
    pub text: String,
    pub link: String,
}

impl From<SongListRow> for SongWithDetail {
    fn from(row: SongListRow) -> Self {
        Self {
            group: row.group_name,
            song: row.song_name,
            detail: SongDetail {
                release_date: row.release_date,
                text: row.text,
                link: row.link,
            },
        }
    }
}
