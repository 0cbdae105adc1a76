//! PostgreSQL-backed [`SongStore`].

use async_trait::async_trait;
use songlib_core::error::CoreError;
use songlib_core::filter::SongFilter;
use songlib_core::pagination::PageWindow;
use songlib_core::song::{SongDetail, SongKey, SongWithDetail};
use songlib_core::store::SongStore;
use songlib_core::types::DbId;

use crate::repositories::{is_unique_violation, GroupRepo, SongRepo, UQ_SONGS_GROUP_ID_NAME};
use crate::DbPool;

/// Relational song store over a shared connection pool.
#[derive(Clone)]
pub struct PgSongStore {
    pool: DbPool,
}

impl PgSongStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Wrap a backend error. Details stay in the message for logging only.
fn store_failure(err: sqlx::Error) -> CoreError {
    CoreError::StoreFailure(err.to_string())
}

fn song_not_found(key: &SongKey) -> CoreError {
    CoreError::NotFound {
        entity: "Song",
        key: key.to_string(),
    }
}

#[async_trait]
impl SongStore for PgSongStore {
    async fn save_song(&self, key: &SongKey) -> Result<DbId, CoreError> {
        let mut tx = self.pool.begin().await.map_err(store_failure)?;

        let group_id = GroupRepo::resolve_or_create(&mut tx, key.group())
            .await
            .map_err(store_failure)?;

        let song = match SongRepo::create(&mut tx, group_id, key.song()).await {
            Ok(song) => song,
            Err(err) if is_unique_violation(&err, UQ_SONGS_GROUP_ID_NAME) => {
                return Err(CoreError::AlreadyExists {
                    entity: "Song",
                    key: key.to_string(),
                });
            }
            Err(err) => return Err(store_failure(err)),
        };

        tx.commit().await.map_err(store_failure)?;
        Ok(song.id)
    }

    async fn find_song_detail(&self, key: &SongKey) -> Result<SongDetail, CoreError> {
        SongRepo::find_detail(&self.pool, key.group(), key.song())
            .await
            .map_err(store_failure)?
            .map(SongDetail::from)
            .ok_or_else(|| song_not_found(key))
    }

    async fn update_song_detail(
        &self,
        key: &SongKey,
        detail: &SongDetail,
    ) -> Result<(), CoreError> {
        let updated = SongRepo::update_detail(&self.pool, key.group(), key.song(), detail)
            .await
            .map_err(store_failure)?;
        if !updated {
            return Err(song_not_found(key));
        }
        Ok(())
    }

    async fn delete_song(&self, key: &SongKey) -> Result<DbId, CoreError> {
        let song_id = SongRepo::delete(&self.pool, key.group(), key.song())
            .await
            .map_err(store_failure)?
            .ok_or_else(|| song_not_found(key))?;

        // Fails on the foreign key while other songs remain; that is expected.
        if let Err(err) = GroupRepo::delete_by_name(&self.pool, key.group()).await {
            tracing::debug!(group = %key.group(), error = %err, "Group kept after song delete");
        }

        Ok(song_id)
    }

    async fn list_songs(
        &self,
        filter: &SongFilter,
        window: PageWindow,
    ) -> Result<Vec<SongWithDetail>, CoreError> {
        let rows = SongRepo::list_filtered(&self.pool, filter, window.limit(), window.offset())
            .await
            .map_err(store_failure)?;
        Ok(rows.into_iter().map(SongWithDetail::from).collect())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(store_failure)
    }
}
