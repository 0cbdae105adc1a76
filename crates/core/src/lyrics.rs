//! Verse pagination for stored lyric text.
//!
//! Verses are separated by exactly one blank line. The split is literal:
//! a verse that itself contains a blank line cannot be represented, and
//! verses are returned untrimmed.

/// Separator between two verses.
pub const VERSE_DELIMITER: &str = "\n\n";

/// Split lyric text into its verses, in order.
///
/// Empty text yields a single empty verse.
pub fn split_verses(text: &str) -> Vec<&str> {
    text.split(VERSE_DELIMITER).collect()
}

/// Return the verse at 1-based `page`, or `None` when out of range.
pub fn verse_at(text: &str, page: i64) -> Option<&str> {
    let index = usize::try_from(page).ok()?.checked_sub(1)?;
    split_verses(text).get(index).copied()
}
