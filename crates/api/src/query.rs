//! Query-string and body types shared by the song handlers.
//!
//! Everything arrives as text: pagination values are parsed by
//! `songlib_core::pagination` so a non-numeric `page` is a validation
//! error with a useful message instead of an extractor rejection.

use serde::Deserialize;
use validator::Validate;

/// `?group=&song=` identifying one song.
#[derive(Debug, Deserialize, Validate)]
pub struct SongIdentityParams {
    #[serde(default)]
    #[validate(length(min = 1, message = "group is required"))]
    pub group: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "song is required"))]
    pub song: String,
}

/// `GET /songs` filter and window (`?group=&song=&date=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct SongListParams {
    pub group: Option<String>,
    pub song: Option<String>,
    pub date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// `GET /songs/text` (`?group=&song=&page=`).
#[derive(Debug, Deserialize, Validate)]
pub struct LyricPageParams {
    #[serde(default)]
    #[validate(length(min = 1, message = "group is required"))]
    pub group: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "song is required"))]
    pub song: String,
    pub page: Option<String>,
}
