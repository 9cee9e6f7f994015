use chrono::Utc;
use domain::song::SongDraft;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub song_id: i32,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: Option<i32>,
    pub genre: String,
    pub release_year: Option<i32>,
    pub spotify_id: String,
    pub youtube_url: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PlaylistSong,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::PlaylistSong => Entity::has_many(super::playlist_song::Entity)
                .from(Column::SongId)
                .to(super::playlist_song::Column::SongId)
                .into(),
        }
    }
}

impl Related<super::playlist_song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaylistSong.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// 可编辑列，主键与 created_at 不设置
    pub fn editable(draft: &SongDraft) -> Self {
        ActiveModel {
            song_id: NotSet,
            title: Set(draft.title.clone()),
            artist: Set(draft.artist.clone()),
            album: Set(draft.album.clone()),
            duration: Set(draft.duration),
            genre: Set(draft.genre.clone()),
            release_year: Set(draft.release_year),
            spotify_id: Set(draft.spotify_id.clone()),
            youtube_url: Set(draft.youtube_url.clone()),
            created_at: NotSet,
        }
    }
}

impl From<&SongDraft> for ActiveModel {
    fn from(draft: &SongDraft) -> Self {
        ActiveModel {
            created_at: Set(Utc::now().naive_utc()),
            ..ActiveModel::editable(draft)
        }
    }
}

impl From<Model> for model::song::Song {
    fn from(m: Model) -> Self {
        model::song::Song {
            song_id: m.song_id,
            title: m.title,
            artist: m.artist,
            album: m.album,
            duration: m.duration,
            genre: m.genre,
            release_year: m.release_year,
            spotify_id: m.spotify_id,
            youtube_url: m.youtube_url,
            created_at: m.created_at,
        }
    }
}
