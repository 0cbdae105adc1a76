//! Catalog service facade.
//!
//! Composes the pagination policy, the read filter, and the lyric
//! paginator over an injected [`SongStore`]. Every operation is a single
//! linear pass with no retries and no state kept between calls.

use std::sync::Arc;

use crate::error::CoreError;
use crate::filter::SongFilter;
use crate::lyrics;
use crate::pagination::PageWindow;
use crate::song::{LyricPage, SongDetail, SongKey, SongPage};
use crate::store::SongStore;
use crate::types::DbId;

/// Entry point for all catalog operations.
///
/// Cheap to clone: the only field is a shared store handle.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn SongStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        Self { store }
    }

    /// Save a new song, creating its group on first use.
    ///
    /// Fails with [`CoreError::AlreadyExists`] if the pair is already saved.
    pub async fn save(&self, group: &str, song: &str) -> Result<DbId, CoreError> {
        let key = SongKey::new(group, song)?;
        self.store.save_song(&key).await
    }

    /// Fetch the detail of one song.
    pub async fn detail(&self, group: &str, song: &str) -> Result<SongDetail, CoreError> {
        let key = SongKey::new(group, song)?;
        self.store.find_song_detail(&key).await
    }

    /// Replace the detail of one song wholesale.
    pub async fn update(
        &self,
        group: &str,
        song: &str,
        detail: &SongDetail,
    ) -> Result<(), CoreError> {
        let key = SongKey::new(group, song)?;
        self.store.update_song_detail(&key, detail).await
    }

    /// Delete one song, returning its id. An emptied group is dropped too.
    pub async fn delete(&self, group: &str, song: &str) -> Result<DbId, CoreError> {
        let key = SongKey::new(group, song)?;
        self.store.delete_song(&key).await
    }

    /// List songs matching `filter` inside `window`.
    ///
    /// An empty page is a normal result; callers check [`SongPage::is_empty`].
    pub async fn list(&self, filter: &SongFilter, window: PageWindow) -> Result<SongPage, CoreError> {
        let songs = self.store.list_songs(filter, window).await?;
        Ok(SongPage {
            items: songs.len(),
            songs,
            page: window.page(),
            limit: window.limit(),
        })
    }

    /// Return verse number `page` (1-based) of a song's lyrics.
    ///
    /// `Ok(None)` means the song exists but has fewer verses than `page`.
    pub async fn lyric_page(
        &self,
        group: &str,
        song: &str,
        page: i64,
    ) -> Result<Option<LyricPage>, CoreError> {
        if page < 1 {
            return Err(CoreError::Validation(format!("page must be >= 1, got {page}")));
        }
        let key = SongKey::new(group, song)?;
        let detail = self.store.find_song_detail(&key).await?;

        Ok(lyrics::verse_at(&detail.text, page).map(|verse| LyricPage {
            group: key.group().to_string(),
            song: key.song().to_string(),
            text: verse.to_string(),
            page,
        }))
    }

    /// Whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use crate::memory::InMemorySongStore;

    fn service() -> (CatalogService, Arc<InMemorySongStore>) {
        let store = Arc::new(InMemorySongStore::new());
        (CatalogService::new(store.clone()), store)
    }

    fn window(page: i64, limit: i64) -> PageWindow {
        PageWindow::new(page, limit).unwrap()
    }

    // -- save ----------------------------------------------------------------

    #[tokio::test]
    async fn second_save_of_same_pair_already_exists() {
        let (catalog, _) = service();
        catalog.save("Muse", "Hysteria").await.unwrap();
        assert_matches!(
            catalog.save("Muse", "Hysteria").await,
            Err(CoreError::AlreadyExists { entity: "Song", .. })
        );
    }

    #[tokio::test]
    async fn save_rechecks_empty_names() {
        let (catalog, store) = service();
        assert_matches!(catalog.save("", "Hysteria").await, Err(CoreError::Validation(_)));
        assert_matches!(catalog.save("Muse", "").await, Err(CoreError::Validation(_)));
        assert_eq!(store.group_count().await, 0);
    }

    // -- missing songs -------------------------------------------------------

    #[tokio::test]
    async fn unknown_song_is_not_found_everywhere() {
        let (catalog, _) = service();
        assert_matches!(
            catalog.detail("Nobody", "Nothing").await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(
            catalog.update("Nobody", "Nothing", &SongDetail::default()).await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(
            catalog.delete("Nobody", "Nothing").await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(
            catalog.lyric_page("Nobody", "Nothing", 1).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn update_needs_the_exact_pair() {
        let (catalog, _) = service();
        catalog.save("Muse", "Hysteria").await.unwrap();
        catalog.save("Blur", "Song 2").await.unwrap();
        assert_matches!(
            catalog.update("Muse", "Song 2", &SongDetail::default()).await,
            Err(CoreError::NotFound { .. })
        );
    }

    // -- update / detail -----------------------------------------------------

    #[tokio::test]
    async fn update_replaces_detail_wholesale() {
        let (catalog, _) = service();
        catalog.save("Muse", "Hysteria").await.unwrap();

        let first = SongDetail {
            release_date: NaiveDate::from_ymd_opt(2003, 12, 1),
            text: "It's bugging me".into(),
            link: "https://example.com/hysteria".into(),
        };
        catalog.update("Muse", "Hysteria", &first).await.unwrap();

        let second = SongDetail {
            text: "Grating me".into(),
            ..SongDetail::default()
        };
        catalog.update("Muse", "Hysteria", &second).await.unwrap();

        assert_eq!(catalog.detail("Muse", "Hysteria").await.unwrap(), second);
    }

    // -- delete --------------------------------------------------------------

    #[tokio::test]
    async fn deleting_last_song_removes_group() {
        let (catalog, store) = service();
        catalog.save("Muse", "Hysteria").await.unwrap();
        catalog.save("Muse", "Starlight").await.unwrap();

        catalog.delete("Muse", "Hysteria").await.unwrap();
        assert!(store.has_group("Muse").await);

        catalog.delete("Muse", "Starlight").await.unwrap();
        assert!(!store.has_group("Muse").await);
    }

    #[tokio::test]
    async fn delete_returns_the_saved_id() {
        let (catalog, _) = service();
        let id = catalog.save("Muse", "Hysteria").await.unwrap();
        assert_eq!(catalog.delete("Muse", "Hysteria").await.unwrap(), id);
    }

    // -- list ----------------------------------------------------------------

    async fn seed_five(catalog: &CatalogService) {
        for n in 1..=5 {
            catalog.save("Five", &format!("Track {n}")).await.unwrap();
        }
    }

    #[tokio::test]
    async fn list_paginates_three_two_empty() {
        let (catalog, _) = service();
        seed_five(&catalog).await;
        let filter = SongFilter::default();

        let page1 = catalog.list(&filter, window(1, 3)).await.unwrap();
        assert_eq!(page1.items, 3);
        assert_eq!(page1.page, 1);
        assert_eq!(page1.limit, 3);

        let page2 = catalog.list(&filter, window(2, 3)).await.unwrap();
        assert_eq!(page2.items, 2);
        assert_eq!(page2.songs[0].song, "Track 4");

        let page3 = catalog.list(&filter, window(3, 3)).await.unwrap();
        assert!(page3.is_empty());
        assert_eq!(page3.items, 0);
    }

    #[tokio::test]
    async fn list_filters_by_group() {
        let (catalog, _) = service();
        seed_five(&catalog).await;
        catalog.save("Other", "Track 1").await.unwrap();

        let filter = SongFilter::from_query(Some("Other"), None, None);
        let page = catalog.list(&filter, window(1, 10)).await.unwrap();
        assert_eq!(page.items, 1);
        assert_eq!(page.songs[0].group, "Other");
    }

    #[tokio::test]
    async fn list_with_all_fields_matches_exactly() {
        let (catalog, _) = service();
        catalog.save("Muse", "Hysteria").await.unwrap();
        catalog.save("Muse", "Starlight").await.unwrap();
        let dated = SongDetail {
            release_date: NaiveDate::from_ymd_opt(2003, 12, 1),
            ..SongDetail::default()
        };
        catalog.update("Muse", "Hysteria", &dated).await.unwrap();
        catalog.update("Muse", "Starlight", &dated).await.unwrap();

        let exact = SongFilter::from_query(Some("Muse"), Some("Hysteria"), Some("01.12.2003"));
        let page = catalog.list(&exact, window(1, 10)).await.unwrap();
        assert_eq!(page.items, 1);
        assert_eq!(page.songs[0].song, "Hysteria");

        let wrong_date = SongFilter::from_query(Some("Muse"), Some("Hysteria"), Some("02.12.2003"));
        let page = catalog.list(&wrong_date, window(1, 10)).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn list_ignores_malformed_date_filter() {
        let (catalog, _) = service();
        seed_five(&catalog).await;
        let filter = SongFilter::from_query(None, None, Some("not a date"));
        let page = catalog.list(&filter, window(1, 10)).await.unwrap();
        assert_eq!(page.items, 5);
    }

    // -- lyric page ----------------------------------------------------------

    #[tokio::test]
    async fn lyric_pages_follow_verses() {
        let (catalog, _) = service();
        catalog.save("ABC", "Letters").await.unwrap();
        let detail = SongDetail {
            text: "A\n\nB\n\nC".into(),
            ..SongDetail::default()
        };
        catalog.update("ABC", "Letters", &detail).await.unwrap();

        for (page, verse) in [(1, "A"), (2, "B"), (3, "C")] {
            let lyric = catalog.lyric_page("ABC", "Letters", page).await.unwrap().unwrap();
            assert_eq!(lyric.text, verse);
            assert_eq!(lyric.page, page);
            assert_eq!(lyric.group, "ABC");
        }
        assert_eq!(catalog.lyric_page("ABC", "Letters", 4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn lyric_page_zero_is_validation_error() {
        let (catalog, _) = service();
        assert_matches!(
            catalog.lyric_page("ABC", "Letters", 0).await,
            Err(CoreError::Validation(_))
        );
    }
}
