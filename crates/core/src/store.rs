//! Store capability consumed by the catalog facade.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::filter::SongFilter;
use crate::pagination::PageWindow;
use crate::song::{SongDetail, SongKey, SongWithDetail};
use crate::types::DbId;

/// Persistence operations the catalog needs.
///
/// Implementations report logical absence as [`CoreError::NotFound`],
/// duplicate keys as [`CoreError::AlreadyExists`], and every backend fault
/// as [`CoreError::StoreFailure`].
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Insert a song, creating its group first if needed.
    async fn save_song(&self, key: &SongKey) -> Result<DbId, CoreError>;

    /// Fetch the detail of one song.
    async fn find_song_detail(&self, key: &SongKey) -> Result<SongDetail, CoreError>;

    /// Overwrite the detail of one song.
    async fn update_song_detail(&self, key: &SongKey, detail: &SongDetail)
        -> Result<(), CoreError>;

    /// Delete a song, then try to drop its group if the group is now empty.
    async fn delete_song(&self, key: &SongKey) -> Result<DbId, CoreError>;

    /// List songs matching `filter` inside `window`, ordered by insertion.
    async fn list_songs(
        &self,
        filter: &SongFilter,
        window: PageWindow,
    ) -> Result<Vec<SongWithDetail>, CoreError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), CoreError>;
}
