//! Song library domain core.
//!
//! Holds the catalog types, the pagination and release-date rules, the
//! lyric paginator, the [`store::SongStore`] capability trait, and the
//! [`catalog::CatalogService`] facade that composes them. No crate here
//! talks to a database or HTTP directly.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod lyrics;
pub mod memory;
pub mod pagination;
pub mod release_date;
pub mod song;
pub mod store;
pub mod types;
