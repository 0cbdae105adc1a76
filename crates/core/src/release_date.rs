//! Release-date text format.
//!
//! Dates travel on the wire as `DD.MM.YYYY`. A song without a release date
//! renders as the empty string, and an empty string reads back as "no date".

use chrono::NaiveDate;

use crate::error::CoreError;

/// `chrono` format string for `DD.MM.YYYY`.
pub const RELEASE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` string. Returns `None` for empty or malformed input.
///
/// Used by read filters, where an unparseable date means "no constraint".
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !has_release_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT).ok()
}

/// Exactly `DD.MM.YYYY`: two-digit day and month, four-digit year.
///
/// `%d.%m.%Y` alone also accepts `1.3.1994` and `15.03.94`.
fn has_release_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Strict variant of [`parse_release_date`] for writes.
///
/// Empty input is accepted as "no date"; anything else must parse.
pub fn parse_release_date_strict(raw: &str) -> Result<Option<NaiveDate>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_release_date(raw).map(Some).ok_or_else(|| {
        CoreError::Validation(format!(
            "releaseDate must use the DD.MM.YYYY format, got '{raw}'"
        ))
    })
}

/// Render a release date for the wire. `None` becomes `""`.
pub fn format_release_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(RELEASE_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// `#[serde(with = "...")]` adapter for `Option<NaiveDate>` fields.
pub mod serde_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_release_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        super::parse_release_date_strict(&raw).map_err(serde::de::Error::custom)
    }
}
