use super::db_data::song::{self, ActiveModel, Entity};
use async_trait::async_trait;
use domain::song::{SongDraft, SongError, SongRepository, SongUpdate};
use domain::value::SongId;
use sea_orm::sea_query::Expr;
use sea_orm::*;

#[derive(Clone)]
pub struct SongRepositoryImpl {
    db: DbConn,
}

impl SongRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// 单字段更新映射到唯一的列
fn column_value(update: &SongUpdate) -> (song::Column, Value) {
    match update {
        SongUpdate::Title(v) => (song::Column::Title, v.clone().into()),
        SongUpdate::Artist(v) => (song::Column::Artist, v.clone().into()),
        SongUpdate::Album(v) => (song::Column::Album, v.clone().into()),
        SongUpdate::Duration(v) => (song::Column::Duration, (*v).into()),
        SongUpdate::Genre(v) => (song::Column::Genre, v.clone().into()),
        SongUpdate::ReleaseYear(v) => (song::Column::ReleaseYear, (*v).into()),
        SongUpdate::SpotifyId(v) => (song::Column::SpotifyId, v.clone().into()),
        SongUpdate::YoutubeUrl(v) => (song::Column::YoutubeUrl, v.clone().into()),
    }
}

#[async_trait]
impl SongRepository for SongRepositoryImpl {
    async fn insert(&self, draft: &SongDraft) -> Result<SongId, SongError> {
        let active_model: ActiveModel = draft.into();
        let result = Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| SongError::DbErr(e.to_string()))?;
        Ok(SongId::from(result.last_insert_id))
    }

    async fn replace(&self, id: SongId, draft: &SongDraft) -> Result<bool, SongError> {
        let result = Entity::update_many()
            .set(ActiveModel::editable(draft))
            .filter(song::Column::SongId.eq(id.as_i32()))
            .exec(&self.db)
            .await
            .map_err(|e| SongError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn update_field(&self, id: SongId, update: &SongUpdate) -> Result<bool, SongError> {
        let (column, value) = column_value(update);
        let result = Entity::update_many()
            .col_expr(column, Expr::value(value))
            .filter(song::Column::SongId.eq(id.as_i32()))
            .exec(&self.db)
            .await
            .map_err(|e| SongError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: SongId) -> Result<bool, SongError> {
        let result = Entity::delete_by_id(id.as_i32())
            .exec(&self.db)
            .await
            .map_err(|e| SongError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
