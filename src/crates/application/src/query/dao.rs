use crate::query::QueryError;
use async_trait::async_trait;
use model::playlist::{Playlist, PlaylistDetail};
use model::song::Song;

#[async_trait]
pub trait PlaylistDao: Send + Sync {
    /// 所有播放列表，按创建时间倒序
    async fn list(&self) -> Result<Vec<Playlist>, QueryError>;
    /// 播放列表及其歌曲，歌曲按位置升序
    async fn get_by_id(&self, id: i32) -> Result<Option<PlaylistDetail>, QueryError>;
}

#[async_trait]
pub trait SongDao: Send + Sync {
    /// 歌曲目录，按创建时间倒序
    async fn list_recent(&self) -> Result<Vec<Song>, QueryError>;
    /// 按标题排序，用于添加歌曲时的选择列表
    async fn list_by_title(&self) -> Result<Vec<Song>, QueryError>;
}
