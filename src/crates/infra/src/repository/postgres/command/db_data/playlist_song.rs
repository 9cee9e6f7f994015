use domain::membership::Membership;
use domain::value::{PlaylistId, SongId};
use sea_orm::{entity::prelude::*, ActiveValue::Set};

/// playlist_songs 表，(playlist_id, song_id) 联合主键
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playlist_songs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub playlist_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub song_id: i32,
    pub position_in_playlist: i32,
    pub added_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Playlist,
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Playlist => Entity::belongs_to(super::playlist::Entity)
                .from(Column::PlaylistId)
                .to(super::playlist::Column::PlaylistId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Self::Song => Entity::belongs_to(super::song::Entity)
                .from(Column::SongId)
                .to(super::song::Column::SongId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<super::playlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlist.def()
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Membership> for ActiveModel {
    fn from(m: &Membership) -> Self {
        ActiveModel {
            playlist_id: Set(m.playlist_id.as_i32()),
            song_id: Set(m.song_id.as_i32()),
            position_in_playlist: Set(m.position),
            added_at: Set(m.added_at),
        }
    }
}

impl From<Model> for Membership {
    fn from(model: Model) -> Self {
        Membership {
            playlist_id: PlaylistId::from(model.playlist_id),
            song_id: SongId::from(model.song_id),
            position: model.position_in_playlist,
            added_at: model.added_at,
        }
    }
}
