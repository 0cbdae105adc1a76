use std::sync::Arc;

use songlib_core::catalog::CatalogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the catalog holds an `Arc` store handle and the config
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations over the configured song store.
    pub catalog: CatalogService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
