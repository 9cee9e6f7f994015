use std::sync::Arc;

use super::shared::Outcome;
use crate::error::AppError;
use domain::field::{updated_message, FieldInput};
use domain::playlist::{PlaylistDraft, PlaylistField, PlaylistRepository};
use domain::value::PlaylistId;
use log::{info, warn};

/// 播放列表应用服务
pub struct PlaylistAppService {
    playlist_repository: Arc<dyn PlaylistRepository>,
}

impl PlaylistAppService {
    pub fn new(playlist_repository: Arc<dyn PlaylistRepository>) -> Self {
        Self {
            playlist_repository,
        }
    }

    /// 创建播放列表
    pub async fn create_playlist(&self, draft: PlaylistDraft) -> Result<PlaylistId, AppError> {
        let draft = draft.validated()?;
        let id = self.playlist_repository.insert(&draft).await?;
        info!("Playlist {} created: {}", id, draft.name);
        Ok(id)
    }

    /// 整体更新播放列表
    pub async fn update_playlist(
        &self,
        id: i32,
        draft: PlaylistDraft,
    ) -> Result<Outcome, AppError> {
        let draft = draft.validated()?;
        let matched = self
            .playlist_repository
            .replace(PlaylistId::from(id), &draft)
            .await?;
        if !matched {
            warn!("Update skipped, playlist {} not found", id);
        }
        Ok(matched.into())
    }

    /// 单字段更新，字段名必须在白名单内
    pub async fn update_playlist_field(
        &self,
        id: i32,
        field: &str,
        value: &FieldInput,
    ) -> Result<Outcome<String>, AppError> {
        let field: PlaylistField = field.parse()?;
        let update = field.coerce(value)?;

        let matched = self
            .playlist_repository
            .update_field(PlaylistId::from(id), &update)
            .await?;
        if matched {
            info!("Playlist {} field {} updated", id, field);
            Ok(Outcome::Done(updated_message(field.as_str())))
        } else {
            warn!("Field update skipped, playlist {} not found", id);
            Ok(Outcome::NotFound)
        }
    }

    /// 删除播放列表
    pub async fn delete_playlist(&self, id: i32) -> Result<Outcome, AppError> {
        let removed = self
            .playlist_repository
            .delete(PlaylistId::from(id))
            .await?;
        if removed {
            info!("Playlist {} deleted", id);
        }
        Ok(removed.into())
    }
}
