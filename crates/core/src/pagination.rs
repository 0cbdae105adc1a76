//! Page/limit policy shared by catalog listing and lyric retrieval.
//!
//! Both values arrive as raw query-string text and must parse as integers
//! `>= 1`. Nothing is clamped: a bad value is a validation error, raised
//! before any store access. There is no upper bound on `limit`.

use crate::error::CoreError;

/// A validated `(page, limit)` pair.
///
/// For catalog listing this maps to a row window; lyric pagination only
/// uses the page number (one verse per page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    limit: i64,
}

impl PageWindow {
    /// Build a window from already-typed values.
    pub fn new(page: i64, limit: i64) -> Result<Self, CoreError> {
        Ok(Self {
            page: ensure_positive(page, "page")?,
            limit: ensure_positive(limit, "limit")?,
        })
    }

    /// Parse raw `page` and `limit` query values.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, CoreError> {
        Ok(Self {
            page: parse_positive(page, "page")?,
            limit: parse_positive(limit, "limit")?,
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset: `(page - 1) * limit`, saturating instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Parse a required positive integer query value.
pub fn parse_positive(raw: Option<&str>, field: &str) -> Result<i64, CoreError> {
    let raw = raw.unwrap_or_default();
    let value: i64 = raw.trim().parse().map_err(|_| {
        CoreError::Validation(format!("{field} must be a positive integer, got '{raw}'"))
    })?;
    ensure_positive(value, field)
}

fn ensure_positive(value: i64, field: &str) -> Result<i64, CoreError> {
    if value < 1 {
        return Err(CoreError::Validation(format!(
            "{field} must be >= 1, got {value}"
        )));
    }
    Ok(value)
}
