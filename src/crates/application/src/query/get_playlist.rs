use crate::query::dao::PlaylistDao;
use crate::query::QueryError;
use model::playlist::{Playlist, PlaylistDetail};
use std::sync::Arc;

/// 获取播放列表查询服务
#[derive(Clone)]
pub struct GetPlaylist {
    playlist_dao: Arc<dyn PlaylistDao>,
}

impl GetPlaylist {
    pub fn new(playlist_dao: Arc<dyn PlaylistDao>) -> Self {
        Self { playlist_dao }
    }

    pub async fn list(&self) -> Result<Vec<Playlist>, QueryError> {
        self.playlist_dao.list().await
    }

    /// 根据 ID 获取播放列表（包含歌曲详情），不存在时返回 `None`
    pub async fn get_by_id(&self, playlist_id: i32) -> Result<Option<PlaylistDetail>, QueryError> {
        self.playlist_dao.get_by_id(playlist_id).await
    }
}
