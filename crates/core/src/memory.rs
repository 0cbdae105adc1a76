//! In-memory [`SongStore`], used by tests and local experiments.
//!
//! Mirrors the relational store: groups are keyed by unique name, songs by
//! `(group_id, name)`, listing is ordered by song id, and a group is only
//! removed once it has no songs left.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::filter::SongFilter;
use crate::pagination::PageWindow;
use crate::song::{SongDetail, SongKey, SongWithDetail};
use crate::store::SongStore;
use crate::types::DbId;

#[derive(Debug)]
struct StoredSong {
    id: DbId,
    group_id: DbId,
    name: String,
    detail: SongDetail,
}

#[derive(Debug, Default)]
struct State {
    /// Group name -> group id.
    groups: BTreeMap<String, DbId>,
    /// Song id -> song. `BTreeMap` keeps listing in insertion order.
    songs: BTreeMap<DbId, StoredSong>,
    next_group_id: DbId,
    next_song_id: DbId,
}

impl State {
    fn song_id(&self, key: &SongKey) -> Option<DbId> {
        let group_id = *self.groups.get(key.group())?;
        self.songs
            .values()
            .find(|s| s.group_id == group_id && s.name == key.song())
            .map(|s| s.id)
    }

    fn group_name(&self, group_id: DbId) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, id)| **id == group_id)
            .map(|(name, _)| name.as_str())
    }
}

/// A [`SongStore`] kept entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemorySongStore {
    state: RwLock<State>,
}

impl InMemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups currently stored.
    pub async fn group_count(&self) -> usize {
        self.state.read().await.groups.len()
    }

    /// Whether a group with this name exists.
    pub async fn has_group(&self, name: &str) -> bool {
        self.state.read().await.groups.contains_key(name)
    }
}

fn not_found(key: &SongKey) -> CoreError {
    CoreError::NotFound {
        entity: "Song",
        key: key.to_string(),
    }
}

#[async_trait]
impl SongStore for InMemorySongStore {
    async fn save_song(&self, key: &SongKey) -> Result<DbId, CoreError> {
        let mut state = self.state.write().await;

        if state.song_id(key).is_some() {
            return Err(CoreError::AlreadyExists {
                entity: "Song",
                key: key.to_string(),
            });
        }

        let existing = state.groups.get(key.group()).copied();
        let group_id = match existing {
            Some(id) => id,
            None => {
                state.next_group_id += 1;
                let id = state.next_group_id;
                state.groups.insert(key.group().to_string(), id);
                id
            }
        };

        state.next_song_id += 1;
        let id = state.next_song_id;
        state.songs.insert(
            id,
            StoredSong {
                id,
                group_id,
                name: key.song().to_string(),
                detail: SongDetail::default(),
            },
        );
        Ok(id)
    }

    async fn find_song_detail(&self, key: &SongKey) -> Result<SongDetail, CoreError> {
        let state = self.state.read().await;
        state
            .song_id(key)
            .and_then(|id| state.songs.get(&id))
            .map(|s| s.detail.clone())
            .ok_or_else(|| not_found(key))
    }

    async fn update_song_detail(
        &self,
        key: &SongKey,
        detail: &SongDetail,
    ) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let id = state.song_id(key).ok_or_else(|| not_found(key))?;
        if let Some(song) = state.songs.get_mut(&id) {
            song.detail = detail.clone();
        }
        Ok(())
    }

    async fn delete_song(&self, key: &SongKey) -> Result<DbId, CoreError> {
        let mut state = self.state.write().await;
        let id = state.song_id(key).ok_or_else(|| not_found(key))?;
        let removed = state.songs.remove(&id).ok_or_else(|| not_found(key))?;

        let group_in_use = state.songs.values().any(|s| s.group_id == removed.group_id);
        if !group_in_use {
            state.groups.remove(key.group());
        }
        Ok(id)
    }

    async fn list_songs(
        &self,
        filter: &SongFilter,
        window: PageWindow,
    ) -> Result<Vec<SongWithDetail>, CoreError> {
        let state = self.state.read().await;
        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);

        let songs = state
            .songs
            .values()
            .filter_map(|s| {
                let group = state.group_name(s.group_id)?;
                let matches = filter.group.as_deref().map_or(true, |g| g == group)
                    && filter.song.as_deref().map_or(true, |n| n == s.name)
                    && filter
                        .release_date
                        .map_or(true, |d| s.detail.release_date == Some(d));
                matches.then(|| SongWithDetail {
                    group: group.to_string(),
                    song: s.name.clone(),
                    detail: s.detail.clone(),
                })
            })
            .skip(offset)
            .take(limit)
            .collect();
        Ok(songs)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
