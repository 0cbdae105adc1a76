pub mod health;
pub mod songs;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree, mounted at the root.
///
/// ```text
/// /info                      song detail (GET)
/// /songs                     list, save, update, delete
/// /songs/text                lyric page (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(songs::router())
}
