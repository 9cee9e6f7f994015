use crate::query::dao::SongDao;
use crate::query::QueryError;
use model::song::Song;
use std::sync::Arc;

/// 歌曲目录查询服务
#[derive(Clone)]
pub struct GetSongs {
    song_dao: Arc<dyn SongDao>,
}

impl GetSongs {
    pub fn new(song_dao: Arc<dyn SongDao>) -> Self {
        Self { song_dao }
    }

    pub async fn recent(&self) -> Result<Vec<Song>, QueryError> {
        self.song_dao.list_recent().await
    }

    pub async fn by_title(&self) -> Result<Vec<Song>, QueryError> {
        self.song_dao.list_by_title().await
    }
}
