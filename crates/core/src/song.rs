//! Catalog entities as seen by the facade and the store trait.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::release_date;

/// Identity of a song: the `(group, song)` name pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongKey {
    group: String,
    song: String,
}

impl SongKey {
    /// Both names are required and must be non-empty.
    pub fn new(group: impl Into<String>, song: impl Into<String>) -> Result<Self, CoreError> {
        let group = group.into();
        let song = song.into();
        if group.is_empty() {
            return Err(CoreError::Validation("group name is required".into()));
        }
        if song.is_empty() {
            return Err(CoreError::Validation("song name is required".into()));
        }
        Ok(Self { group, song })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn song(&self) -> &str {
        &self.song
    }
}

impl fmt::Display for SongKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by '{}'", self.song, self.group)
    }
}

/// The mutable payload of a song. Always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetail {
    #[serde(default, with = "release_date::serde_format")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}

/// A catalog row: identity plus detail, as returned by listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongWithDetail {
    pub group: String,
    pub song: String,
    #[serde(flatten)]
    pub detail: SongDetail,
}

/// One page of a catalog listing, echoing the requested window.
#[derive(Debug, Clone, Serialize)]
pub struct SongPage {
    pub songs: Vec<SongWithDetail>,
    pub page: i64,
    pub limit: i64,
    pub items: usize,
}

impl SongPage {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// A single verse of a song's lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricPage {
    pub group: String,
    pub song: String,
    pub text: String,
    pub page: i64,
}
