//! Route definitions for the song catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::songs;
use crate::state::AppState;

/// Song routes.
///
/// ```text
/// GET    /info            -> song_info
/// GET    /songs           -> list_songs
/// POST   /songs           -> save_song
/// PUT    /songs           -> update_song
/// DELETE /songs           -> delete_song
/// GET    /songs/text      -> song_text
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(songs::song_info))
        .route(
            "/songs",
            get(songs::list_songs)
                .post(songs::save_song)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .route("/songs/text", get(songs::song_text))
}
