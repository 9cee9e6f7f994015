use std::sync::Arc;

use super::shared::Outcome;
use crate::error::AppError;
use domain::membership::{Membership, MembershipError, MembershipRepository};
use domain::value::{PlaylistId, SongId};
use log::{info, warn};

/// 添加歌曲到播放列表的结果
#[derive(Debug, Clone, PartialEq)]
pub enum AddSongOutcome {
    Added { position: i32 },
    AlreadyInPlaylist,
    /// 播放列表或歌曲不存在
    NotFound,
}

/// 播放列表成员关系服务，维护歌曲在播放列表中的顺序
pub struct MembershipService {
    membership_repository: Arc<dyn MembershipRepository>,
}

impl MembershipService {
    pub fn new(membership_repository: Arc<dyn MembershipRepository>) -> Self {
        Self {
            membership_repository,
        }
    }

    /// 追加歌曲到播放列表末尾
    ///
    /// 先读最大位置再插入，两步之间没有加锁，并发添加可能得到相同位置，
    /// 列表查询按 added_at、song_id 再排序保证顺序稳定。
    pub async fn add_song(&self, playlist_id: i32, song_id: i32) -> Result<AddSongOutcome, AppError> {
        let playlist_id = PlaylistId::from(playlist_id);
        let song_id = SongId::from(song_id);

        let max_position = self.membership_repository.max_position(playlist_id).await?;
        let membership = Membership::append(playlist_id, song_id, max_position)?;

        match self.membership_repository.insert(&membership).await {
            Ok(()) => {
                info!(
                    "Song {} added to playlist {} at position {}",
                    song_id, playlist_id, membership.position
                );
                Ok(AddSongOutcome::Added {
                    position: membership.position,
                })
            }
            Err(MembershipError::Duplicate { .. }) => {
                warn!("Song {} is already in playlist {}", song_id, playlist_id);
                Ok(AddSongOutcome::AlreadyInPlaylist)
            }
            Err(MembershipError::MissingParent { .. }) => {
                warn!("Playlist {} or song {} not found", playlist_id, song_id);
                Ok(AddSongOutcome::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 从播放列表移除歌曲，其余歌曲位置不变
    pub async fn remove_song(&self, playlist_id: i32, song_id: i32) -> Result<Outcome, AppError> {
        let removed = self
            .membership_repository
            .delete(PlaylistId::from(playlist_id), SongId::from(song_id))
            .await?;
        if removed {
            info!("Song {} removed from playlist {}", song_id, playlist_id);
        }
        Ok(removed.into())
    }

    pub async fn list(&self, playlist_id: i32) -> Result<Vec<Membership>, AppError> {
        Ok(self
            .membership_repository
            .list(PlaylistId::from(playlist_id))
            .await?)
    }
}
