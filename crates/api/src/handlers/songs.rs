//! Handlers for the song catalog.
//!
//! Paths are mounted at the root. Read-style operations answer a missing
//! song with `204 No Content`; update answers it with 404. Outcomes that
//! end in 204 are logged here at info; rejected requests are logged by
//! [`crate::error::AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use songlib_core::error::CoreError;
use songlib_core::filter::SongFilter;
use songlib_core::pagination::{parse_positive, PageWindow};
use songlib_core::song::SongDetail;
use validator::Validate;

use crate::error::AppResult;
use crate::query::{LyricPageParams, SongIdentityParams, SongListParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /songs` and `DELETE /songs`.
#[derive(Debug, Deserialize, Validate)]
pub struct SongIdentityRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "group is required"))]
    pub group: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "song is required"))]
    pub song: String,
}

/// Body of `PUT /songs`: identity plus the full replacement detail.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSongRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "group is required"))]
    pub group: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "song is required"))]
    pub song: String,
    #[serde(flatten)]
    pub detail: SongDetail,
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /info?group=&song=
pub async fn song_info(
    State(state): State<AppState>,
    Query(params): Query<SongIdentityParams>,
) -> AppResult<Response> {
    params.validate()?;

    match state.catalog.detail(&params.group, &params.song).await {
        Ok(detail) => Ok(Json(detail).into_response()),
        Err(CoreError::NotFound { .. }) => {
            tracing::info!(group = %params.group, song = %params.song, "Song not found");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /songs?group=&song=&date=&page=&limit=
///
/// `page` and `limit` are required. An empty page is `204`.
pub async fn list_songs(
    State(state): State<AppState>,
    Query(params): Query<SongListParams>,
) -> AppResult<Response> {
    let window = PageWindow::parse(params.page.as_deref(), params.limit.as_deref())?;
    let filter = SongFilter::from_query(
        params.group.as_deref(),
        params.song.as_deref(),
        params.date.as_deref(),
    );

    let page = state.catalog.list(&filter, window).await?;

    if page.is_empty() {
        tracing::info!(
            page = page.page,
            limit = page.limit,
            filter = ?filter,
            "No songs on this page",
        );
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    tracing::debug!(
        page = page.page,
        limit = page.limit,
        items = page.items,
        "Songs listed",
    );
    Ok(Json(page).into_response())
}

/// GET /songs/text?group=&song=&page=
///
/// One verse per page. A page past the last verse is `204`.
pub async fn song_text(
    State(state): State<AppState>,
    Query(params): Query<LyricPageParams>,
) -> AppResult<Response> {
    let page = parse_positive(params.page.as_deref(), "page")?;
    params.validate()?;

    let verse = state
        .catalog
        .lyric_page(&params.group, &params.song, page)
        .await;

    match verse {
        Ok(Some(verse)) => Ok(Json(verse).into_response()),
        Ok(None) => {
            tracing::info!(
                group = %params.group,
                song = %params.song,
                page,
                "Song text has no such page",
            );
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(CoreError::NotFound { .. }) => {
            tracing::info!(group = %params.group, song = %params.song, "Song not found");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /songs
///
/// `201` with no body; a duplicate pair is `208 Already Reported`.
pub async fn save_song(
    State(state): State<AppState>,
    payload: Result<Json<SongIdentityRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(input) = payload?;
    input.validate()?;

    let song_id = state.catalog.save(&input.group, &input.song).await?;

    tracing::info!(song_id, group = %input.group, song = %input.song, "Song saved");

    Ok(StatusCode::CREATED)
}

/// PUT /songs
///
/// Replaces release date, text and link wholesale.
pub async fn update_song(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSongRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(input) = payload?;
    input.validate()?;

    state
        .catalog
        .update(&input.group, &input.song, &input.detail)
        .await?;

    tracing::info!(group = %input.group, song = %input.song, "Song updated");

    Ok(StatusCode::OK)
}

/// DELETE /songs
pub async fn delete_song(
    State(state): State<AppState>,
    payload: Result<Json<SongIdentityRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload?;
    input.validate()?;

    match state.catalog.delete(&input.group, &input.song).await {
        Ok(song_id) => {
            tracing::info!(song_id, group = %input.group, song = %input.song, "Song deleted");
            Ok(StatusCode::OK.into_response())
        }
        Err(CoreError::NotFound { .. }) => {
            tracing::info!(group = %input.group, song = %input.song, "Song not found");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(err) => Err(err.into()),
    }
}
