//! Read filter for catalog listing.

use chrono::NaiveDate;

use crate::release_date::parse_release_date;

/// Optional constraints for a catalog listing.
///
/// Each field is independent; `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl SongFilter {
    /// Build a filter from raw query values.
    ///
    /// Empty strings count as absent, and a release date that does not
    /// parse as `DD.MM.YYYY` is dropped rather than rejected.
    pub fn from_query(group: Option<&str>, song: Option<&str>, date: Option<&str>) -> Self {
        Self {
            group: non_empty(group),
            song: non_empty(song),
            release_date: date.and_then(parse_release_date),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
