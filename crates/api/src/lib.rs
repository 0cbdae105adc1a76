//! Song library API server library.
//!
//! Exposes config, state, error handling, logging, the router and its
//! routes so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
