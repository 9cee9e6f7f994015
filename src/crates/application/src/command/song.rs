use std::sync::Arc;

use super::shared::Outcome;
use crate::error::AppError;
use domain::field::{updated_message, FieldInput};
use domain::song::{SongDraft, SongField, SongRepository};
use domain::value::SongId;
use log::{info, warn};

/// 歌曲应用服务
pub struct SongAppService {
    song_repository: Arc<dyn SongRepository>,
}

impl SongAppService {
    pub fn new(song_repository: Arc<dyn SongRepository>) -> Self {
        Self { song_repository }
    }

    /// 新建歌曲，返回新 ID
    pub async fn create_song(&self, draft: SongDraft) -> Result<SongId, AppError> {
        let draft = draft.validated()?;
        let id = self.song_repository.insert(&draft).await?;
        info!("Song {} created: {} - {}", id, draft.artist, draft.title);
        Ok(id)
    }

    /// 整体更新歌曲（表单提交）
    pub async fn update_song(&self, id: i32, draft: SongDraft) -> Result<Outcome, AppError> {
        let draft = draft.validated()?;
        let matched = self
            .song_repository
            .replace(SongId::from(id), &draft)
            .await?;
        if !matched {
            warn!("Update skipped, song {} not found", id);
        }
        Ok(matched.into())
    }

    /// 单字段更新
    ///
    /// 字段名先解析为白名单内的 `SongField`，不在白名单内直接拒绝，不会执行任何 SQL。
    pub async fn update_song_field(
        &self,
        id: i32,
        field: &str,
        value: &FieldInput,
    ) -> Result<Outcome<String>, AppError> {
        let field: SongField = field.parse()?;
        let update = field.coerce(value)?;

        let matched = self
            .song_repository
            .update_field(SongId::from(id), &update)
            .await?;
        if matched {
            info!("Song {} field {} updated", id, field);
            Ok(Outcome::Done(updated_message(field.as_str())))
        } else {
            warn!("Field update skipped, song {} not found", id);
            Ok(Outcome::NotFound)
        }
    }

    pub async fn delete_song(&self, id: i32) -> Result<Outcome, AppError> {
        let removed = self.song_repository.delete(SongId::from(id)).await?;
        if removed {
            info!("Song {} deleted", id);
        }
        Ok(removed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::InMemorySongRepository;
    use domain::song::SongUpdate;

    fn service() -> (SongAppService, Arc<InMemorySongRepository>) {
        let repo = Arc::new(InMemorySongRepository::default());
        (SongAppService::new(repo.clone()), repo)
    }

    fn draft(title: &str, artist: &str) -> SongDraft {
        SongDraft {
            title: title.to_string(),
            artist: artist.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_requires_title_and_artist() {
        let (svc, repo) = service();
        let err = svc.create_song(draft("", "Nobody")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(svc.create_song(draft("Song", " ")).await.is_err());
        assert_eq!(repo.len(), 0);

        let id = svc.create_song(draft("Song", "Somebody")).await.unwrap();
        assert_eq!(repo.get(id).unwrap().title, "Song");
    }

    #[tokio::test]
    async fn test_update_duration_field() {
        let (svc, repo) = service();
        let id = svc.create_song(draft("Heroes", "Bowie")).await.unwrap();

        let outcome = svc
            .update_song_field(id.as_i32(), "duration", &FieldInput::from("245"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Done("Duration updated successfully!".to_string())
        );
        assert_eq!(repo.get(id).unwrap().duration, Some(245));

        svc.update_song_field(id.as_i32(), "duration", &FieldInput::from(""))
            .await
            .unwrap();
        assert_eq!(repo.get(id).unwrap().duration, None);

        let err = svc
            .update_song_field(id.as_i32(), "duration", &FieldInput::from("abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unknown_field_never_reaches_repository() {
        let (svc, repo) = service();
        let id = svc.create_song(draft("Heroes", "Bowie")).await.unwrap();

        let err = svc
            .update_song_field(id.as_i32(), "title = 'x' --", &FieldInput::from("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownField(_)));
        assert!(repo.field_updates().is_empty());
    }

    #[tokio::test]
    async fn test_update_field_of_missing_song() {
        let (svc, repo) = service();
        let outcome = svc
            .update_song_field(42, "genre", &FieldInput::from("Jazz"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(
            repo.field_updates(),
            vec![SongUpdate::Genre("Jazz".to_string())]
        );
    }

    #[tokio::test]
    async fn test_full_update_and_delete() {
        let (svc, repo) = service();
        let id = svc.create_song(draft("Heroes", "Bowie")).await.unwrap();

        let mut changed = draft("Heroes", "David Bowie");
        changed.release_year = Some(1977);
        assert_eq!(
            svc.update_song(id.as_i32(), changed).await.unwrap(),
            Outcome::Done(())
        );
        assert_eq!(repo.get(id).unwrap().release_year, Some(1977));
        assert_eq!(
            svc.update_song(999, draft("a", "b")).await.unwrap(),
            Outcome::NotFound
        );

        assert_eq!(svc.delete_song(id.as_i32()).await.unwrap(), Outcome::Done(()));
        assert_eq!(svc.delete_song(id.as_i32()).await.unwrap(), Outcome::NotFound);
    }
}
