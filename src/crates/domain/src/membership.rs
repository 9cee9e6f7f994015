use crate::value::{PlaylistId, SongId};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use thiserror::Error;

/// 播放列表成员关系错误
#[derive(Error, Debug)]
pub enum MembershipError {
    /// (playlist_id, song_id) 已存在
    #[error("Song {song_id} is already in playlist {playlist_id}")]
    Duplicate {
        playlist_id: PlaylistId,
        song_id: SongId,
    },
    /// 播放列表或歌曲不存在（外键约束）
    #[error("Playlist {playlist_id} or song {song_id} does not exist")]
    MissingParent {
        playlist_id: PlaylistId,
        song_id: SongId,
    },
    /// 位置已达上限，无法继续追加
    #[error("Playlist {playlist_id} has no position left for another song")]
    PositionOverflow { playlist_id: PlaylistId },
    #[error("Database error: {0}")]
    DbErr(String),
}

/// 歌曲在播放列表中的成员关系
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
    pub position: i32,
    pub added_at: NaiveDateTime,
}

impl Membership {
    /// 追加到末尾：位置为当前最大位置 + 1，空列表从 1 开始。
    /// 删除后不回填空位，位置只增不减。
    pub fn append(
        playlist_id: PlaylistId,
        song_id: SongId,
        max_position: Option<i32>,
    ) -> Result<Self, MembershipError> {
        let position = next_position(max_position)
            .ok_or(MembershipError::PositionOverflow { playlist_id })?;
        Ok(Self {
            playlist_id,
            song_id,
            position,
            added_at: Utc::now().naive_utc(),
        })
    }
}

pub fn next_position(max_position: Option<i32>) -> Option<i32> {
    max_position.unwrap_or(0).checked_add(1)
}

/// 成员关系仓储接口
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn max_position(&self, playlist_id: PlaylistId) -> Result<Option<i32>, MembershipError>;

    /// 插入成员关系，唯一约束冲突返回 `MembershipError::Duplicate`
    async fn insert(&self, membership: &Membership) -> Result<(), MembershipError>;

    async fn delete(&self, playlist_id: PlaylistId, song_id: SongId)
        -> Result<bool, MembershipError>;

    /// 按 position 升序，相同位置按 added_at、song_id 升序
    async fn list(&self, playlist_id: PlaylistId) -> Result<Vec<Membership>, MembershipError>;
}
