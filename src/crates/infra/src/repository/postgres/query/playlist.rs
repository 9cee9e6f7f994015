use crate::repository::postgres::command::db_data::{playlist, playlist_song, song};
use application::query::dao::PlaylistDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::playlist::{Playlist, PlaylistDetail, PlaylistTrack};
use sea_orm::*;

pub struct PlaylistDaoImpl {
    db: DatabaseConnection,
}

impl PlaylistDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlaylistDao for PlaylistDaoImpl {
    async fn list(&self) -> Result<Vec<Playlist>, QueryError> {
        let rows = playlist::Entity::find()
            .order_by_desc(playlist::Column::CreatedAt)
            .order_by_desc(playlist::Column::PlaylistId)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(rows.into_iter().map(Playlist::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<PlaylistDetail>, QueryError> {
        let Some(found) = playlist::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?
        else {
            return Ok(None);
        };

        let rows = playlist_song::Entity::find()
            .filter(playlist_song::Column::PlaylistId.eq(id))
            .find_also_related(song::Entity)
            .order_by_asc(playlist_song::Column::PositionInPlaylist)
            .order_by_asc(playlist_song::Column::AddedAt)
            .order_by_asc(playlist_song::Column::SongId)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        // 外键级联保证成员关系总有对应歌曲
        let tracks = rows
            .into_iter()
            .filter_map(|(entry, song)| {
                song.map(|song| PlaylistTrack {
                    song: song.into(),
                    position_in_playlist: entry.position_in_playlist,
                    added_at: entry.added_at,
                })
            })
            .collect();

        Ok(Some(PlaylistDetail {
            playlist: found.into(),
            tracks,
        }))
    }
}
