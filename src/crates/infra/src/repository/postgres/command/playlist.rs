use super::db_data::playlist::{self, ActiveModel, Entity};
use async_trait::async_trait;
use domain::playlist::{PlaylistDraft, PlaylistError, PlaylistRepository, PlaylistUpdate};
use domain::value::PlaylistId;
use sea_orm::sea_query::Expr;
use sea_orm::*;

#[derive(Clone)]
pub struct PlaylistRepositoryImpl {
    db: DbConn,
}

impl PlaylistRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn column_value(update: &PlaylistUpdate) -> (playlist::Column, Value) {
    match update {
        PlaylistUpdate::Name(v) => (playlist::Column::Name, v.clone().into()),
        PlaylistUpdate::Description(v) => (playlist::Column::Description, v.clone().into()),
        PlaylistUpdate::IsPublic(v) => (playlist::Column::IsPublic, (*v).into()),
        PlaylistUpdate::CreatedBy(v) => (playlist::Column::CreatedBy, v.clone().into()),
    }
}

#[async_trait]
impl PlaylistRepository for PlaylistRepositoryImpl {
    async fn insert(&self, draft: &PlaylistDraft) -> Result<PlaylistId, PlaylistError> {
        let active_model: ActiveModel = draft.into();
        let result = Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| PlaylistError::DbErr(e.to_string()))?;
        Ok(PlaylistId::from(result.last_insert_id))
    }

    async fn replace(&self, id: PlaylistId, draft: &PlaylistDraft) -> Result<bool, PlaylistError> {
        let result = Entity::update_many()
            .set(ActiveModel::editable(draft))
            .filter(playlist::Column::PlaylistId.eq(id.as_i32()))
            .exec(&self.db)
            .await
            .map_err(|e| PlaylistError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn update_field(
        &self,
        id: PlaylistId,
        update: &PlaylistUpdate,
    ) -> Result<bool, PlaylistError> {
        let (column, value) = column_value(update);
        let result = Entity::update_many()
            .col_expr(column, Expr::value(value))
            .filter(playlist::Column::PlaylistId.eq(id.as_i32()))
            .exec(&self.db)
            .await
            .map_err(|e| PlaylistError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: PlaylistId) -> Result<bool, PlaylistError> {
        // playlist_songs 由外键 ON DELETE CASCADE 清理
        let result = Entity::delete_by_id(id.as_i32())
            .exec(&self.db)
            .await
            .map_err(|e| PlaylistError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::postgres::command::db_data::playlist_song;
    use crate::repository::postgres::command::membership::MembershipRepositoryImpl;
    use crate::repository::postgres::command::song::SongRepositoryImpl;
    use crate::repository::postgres::test_support::setup_db;
    use domain::membership::{Membership, MembershipRepository};
    use domain::song::{SongDraft, SongRepository};

    fn draft(name: &str) -> PlaylistDraft {
        PlaylistDraft {
            name: name.to_string(),
            description: "late night".to_string(),
            is_public: false,
            created_by: "ana".to_string(),
        }
    }

    async fn membership_count(db: &DbConn, id: PlaylistId) -> u64 {
        playlist_song::Entity::find()
            .filter(playlist_song::Column::PlaylistId.eq(id.as_i32()))
            .count(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_update_is_public() {
        let db = setup_db().await;
        let repo = PlaylistRepositoryImpl::new(db.clone());
        let id = repo.insert(&draft("Focus")).await.unwrap();

        assert!(repo
            .update_field(id, &PlaylistUpdate::IsPublic(true))
            .await
            .unwrap());
        let stored = Entity::find_by_id(id.as_i32())
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_public);
        assert_eq!(stored.description, "late night");
    }

    #[tokio::test]
    async fn test_replace_all_columns() {
        let db = setup_db().await;
        let repo = PlaylistRepositoryImpl::new(db.clone());
        let id = repo.insert(&draft("Focus")).await.unwrap();

        let changed = PlaylistDraft {
            name: "Deep Focus".to_string(),
            description: String::new(),
            is_public: true,
            created_by: "ben".to_string(),
        };
        assert!(repo.replace(id, &changed).await.unwrap());
        let stored = Entity::find_by_id(id.as_i32())
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Deep Focus");
        assert_eq!(stored.created_by, "ben");
        assert!(!repo.replace(PlaylistId::from(77), &changed).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_cascades_memberships() {
        let db = setup_db().await;
        let repo = PlaylistRepositoryImpl::new(db.clone());
        let songs = SongRepositoryImpl::new(db.clone());
        let memberships = MembershipRepositoryImpl::new(db.clone());

        let keep = repo.insert(&draft("Keep")).await.unwrap();
        let doomed = repo.insert(&draft("Doomed")).await.unwrap();
        for (position, title) in ["A", "B"].into_iter().enumerate() {
            let song_id = songs
                .insert(&SongDraft {
                    title: title.to_string(),
                    artist: "X".to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
            for playlist_id in [keep, doomed] {
                memberships
                    .insert(&Membership::append(
                        playlist_id,
                        song_id,
                        Some(position as i32),
                    )
                    .unwrap())
                    .await
                    .unwrap();
            }
        }
        assert_eq!(membership_count(&db, doomed).await, 2);

        assert!(repo.delete(doomed).await.unwrap());
        assert_eq!(membership_count(&db, doomed).await, 0);
        assert_eq!(membership_count(&db, keep).await, 2);
        assert!(!repo.delete(doomed).await.unwrap());
    }
}
