use super::db_data::playlist_song::{self, ActiveModel, Entity};
use async_trait::async_trait;
use domain::membership::{Membership, MembershipError, MembershipRepository};
use domain::value::{PlaylistId, SongId};
use log::error;
use sea_orm::*;

#[derive(Clone)]
pub struct MembershipRepositoryImpl {
    db: DbConn,
}

impl MembershipRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// 按约束类型区分插入失败
fn classify_insert_error(e: DbErr, membership: &Membership) -> MembershipError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => MembershipError::Duplicate {
            playlist_id: membership.playlist_id,
            song_id: membership.song_id,
        },
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => MembershipError::MissingParent {
            playlist_id: membership.playlist_id,
            song_id: membership.song_id,
        },
        _ => {
            error!(
                "Failed to add song {} to playlist {}: {}",
                membership.song_id, membership.playlist_id, e
            );
            MembershipError::DbErr(e.to_string())
        }
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryImpl {
    async fn max_position(&self, playlist_id: PlaylistId) -> Result<Option<i32>, MembershipError> {
        let max: Option<Option<i32>> = Entity::find()
            .select_only()
            .column_as(playlist_song::Column::PositionInPlaylist.max(), "max_position")
            .filter(playlist_song::Column::PlaylistId.eq(playlist_id.as_i32()))
            .into_tuple::<Option<i32>>()
            .one(&self.db)
            .await
            .map_err(|e| MembershipError::DbErr(e.to_string()))?;
        Ok(max.flatten())
    }

    async fn insert(&self, membership: &Membership) -> Result<(), MembershipError> {
        let active_model: ActiveModel = membership.into();
        Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| classify_insert_error(e, membership))?;
        Ok(())
    }

    async fn delete(
        &self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<bool, MembershipError> {
        let result = Entity::delete_many()
            .filter(playlist_song::Column::PlaylistId.eq(playlist_id.as_i32()))
            .filter(playlist_song::Column::SongId.eq(song_id.as_i32()))
            .exec(&self.db)
            .await
            .map_err(|e| MembershipError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self, playlist_id: PlaylistId) -> Result<Vec<Membership>, MembershipError> {
        let rows = Entity::find()
            .filter(playlist_song::Column::PlaylistId.eq(playlist_id.as_i32()))
            .order_by_asc(playlist_song::Column::PositionInPlaylist)
            .order_by_asc(playlist_song::Column::AddedAt)
            .order_by_asc(playlist_song::Column::SongId)
            .all(&self.db)
            .await
            .map_err(|e| MembershipError::DbErr(e.to_string()))?;
        Ok(rows.into_iter().map(Membership::from).collect())
    }
}
