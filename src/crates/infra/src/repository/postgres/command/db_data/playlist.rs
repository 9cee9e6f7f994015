use chrono::Utc;
use domain::playlist::PlaylistDraft;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub playlist_id: i32,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub created_by: String,
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
                .from(Column::PlaylistId)
                .to(super::playlist_song::Column::PlaylistId)
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
    pub fn editable(draft: &PlaylistDraft) -> Self {
        ActiveModel {
            playlist_id: NotSet,
            name: Set(draft.name.clone()),
            description: Set(draft.description.clone()),
            is_public: Set(draft.is_public),
            created_by: Set(draft.created_by.clone()),
            created_at: NotSet,
        }
    }
}

impl From<&PlaylistDraft> for ActiveModel {
    fn from(draft: &PlaylistDraft) -> Self {
        ActiveModel {
            created_at: Set(Utc::now().naive_utc()),
            ..ActiveModel::editable(draft)
        }
    }
}

impl From<Model> for model::playlist::Playlist {
    fn from(m: Model) -> Self {
        model::playlist::Playlist {
            playlist_id: m.playlist_id,
            name: m.name,
            description: m.description,
            is_public: m.is_public,
            created_by: m.created_by,
            created_at: m.created_at,
        }
    }
}
