use crate::repository::postgres::command::db_data::song;
use application::query::dao::SongDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::song::Song;
use sea_orm::*;

pub struct SongDaoImpl {
    db: DatabaseConnection,
}

impl SongDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<song::Entity>) -> Result<Vec<Song>, QueryError> {
        let rows = query
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(rows.into_iter().map(Song::from).collect())
    }
}

#[async_trait]
impl SongDao for SongDaoImpl {
    async fn list_recent(&self) -> Result<Vec<Song>, QueryError> {
        self.fetch(
            song::Entity::find()
                .order_by_desc(song::Column::CreatedAt)
                .order_by_desc(song::Column::SongId),
        )
        .await
    }

    async fn list_by_title(&self) -> Result<Vec<Song>, QueryError> {
        self.fetch(
            song::Entity::find()
                .order_by_asc(song::Column::Title)
                .order_by_asc(song::Column::SongId),
        )
        .await
    }
}
