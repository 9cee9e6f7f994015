//! 应用层测试用的内存仓储

use async_trait::async_trait;
use domain::membership::{Membership, MembershipError, MembershipRepository};
use domain::playlist::{PlaylistDraft, PlaylistError, PlaylistRepository, PlaylistUpdate};
use domain::song::{SongDraft, SongError, SongRepository, SongUpdate};
use domain::value::{PlaylistId, SongId};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemorySongRepository {
    rows: Mutex<BTreeMap<i32, SongDraft>>,
    updates: Mutex<Vec<SongUpdate>>,
}

impl InMemorySongRepository {
    pub fn get(&self, id: SongId) -> Option<SongDraft> {
        self.rows.lock().unwrap().get(&id.as_i32()).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn field_updates(&self) -> Vec<SongUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn insert(&self, draft: &SongDraft) -> Result<SongId, SongError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        rows.insert(id, draft.clone());
        Ok(SongId::from(id))
    }

    async fn replace(&self, id: SongId, draft: &SongDraft) -> Result<bool, SongError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id.as_i32()) {
            Some(row) => {
                *row = draft.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_field(&self, id: SongId, update: &SongUpdate) -> Result<bool, SongError> {
        self.updates.lock().unwrap().push(update.clone());
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id.as_i32()) else {
            return Ok(false);
        };
        row.apply(update.clone());
        Ok(true)
    }

    async fn delete(&self, id: SongId) -> Result<bool, SongError> {
        Ok(self.rows.lock().unwrap().remove(&id.as_i32()).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryPlaylistRepository {
    rows: Mutex<BTreeMap<i32, PlaylistDraft>>,
    updates: Mutex<Vec<PlaylistUpdate>>,
}

impl InMemoryPlaylistRepository {
    pub fn get(&self, id: PlaylistId) -> Option<PlaylistDraft> {
        self.rows.lock().unwrap().get(&id.as_i32()).cloned()
    }

    pub fn field_updates(&self) -> Vec<PlaylistUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepository {
    async fn insert(&self, draft: &PlaylistDraft) -> Result<PlaylistId, PlaylistError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        rows.insert(id, draft.clone());
        Ok(PlaylistId::from(id))
    }

    async fn replace(&self, id: PlaylistId, draft: &PlaylistDraft) -> Result<bool, PlaylistError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id.as_i32()) {
            Some(row) => {
                *row = draft.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_field(
        &self,
        id: PlaylistId,
        update: &PlaylistUpdate,
    ) -> Result<bool, PlaylistError> {
        self.updates.lock().unwrap().push(update.clone());
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id.as_i32()) else {
            return Ok(false);
        };
        row.apply(update.clone());
        Ok(true)
    }

    async fn delete(&self, id: PlaylistId) -> Result<bool, PlaylistError> {
        Ok(self.rows.lock().unwrap().remove(&id.as_i32()).is_some())
    }
}

/// 模拟 playlist_songs 表：联合主键 + 两个外键
#[derive(Default)]
pub struct InMemoryMembershipRepository {
    playlists: HashSet<i32>,
    songs: HashSet<i32>,
    rows: Mutex<Vec<Membership>>,
    insert_failure: Mutex<Option<String>>,
}

impl InMemoryMembershipRepository {
    pub fn with_parents(playlists: &[i32], songs: &[i32]) -> Self {
        Self {
            playlists: playlists.iter().copied().collect(),
            songs: songs.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn count_pair(&self, playlist_id: i32, song_id: i32) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.playlist_id.as_i32() == playlist_id && m.song_id.as_i32() == song_id)
            .count()
    }

    pub fn fail_next_insert(&self, message: &str) {
        *self.insert_failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn max_position(&self, playlist_id: PlaylistId) -> Result<Option<i32>, MembershipError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.playlist_id == playlist_id)
            .map(|m| m.position)
            .max())
    }

    async fn insert(&self, membership: &Membership) -> Result<(), MembershipError> {
        if let Some(message) = self.insert_failure.lock().unwrap().take() {
            return Err(MembershipError::DbErr(message));
        }
        if !self.playlists.contains(&membership.playlist_id.as_i32())
            || !self.songs.contains(&membership.song_id.as_i32())
        {
            return Err(MembershipError::MissingParent {
                playlist_id: membership.playlist_id,
                song_id: membership.song_id,
            });
        }
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|m| m.playlist_id == membership.playlist_id && m.song_id == membership.song_id)
        {
            return Err(MembershipError::Duplicate {
                playlist_id: membership.playlist_id,
                song_id: membership.song_id,
            });
        }
        rows.push(membership.clone());
        Ok(())
    }

    async fn delete(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<bool, MembershipError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| !(m.playlist_id == playlist_id && m.song_id == song_id));
        Ok(rows.len() < before)
    }

    async fn list(&self, playlist_id: PlaylistId) -> Result<Vec<Membership>, MembershipError> {
        let mut list: Vec<Membership> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.playlist_id == playlist_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            (a.position, a.added_at, a.song_id.as_i32())
                .cmp(&(b.position, b.added_at, b.song_id.as_i32()))
        });
        Ok(list)
    }
}
