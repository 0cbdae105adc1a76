//! Row models for the catalog tables.
//!
//! Each submodule holds a `FromRow` struct matching a table row or a
//! query projection, plus conversions into the core domain types.

pub mod group;
pub mod song;
