use crate::field::{FieldError, FieldInput};
use crate::value::PlaylistId;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 播放列表领域错误
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("Database error: {0}")]
    DbErr(String),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// 新建或整体替换播放列表时提交的数据
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaylistDraft {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub created_by: String,
}

impl PlaylistDraft {
    pub fn validated(mut self) -> Result<Self, PlaylistError> {
        self.name = FieldInput::Text(self.name).to_required_text("name")?;
        Ok(self)
    }

    pub fn from_fields<I>(fields: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (PlaylistField, FieldInput)>,
    {
        let mut draft = PlaylistDraft::default();
        for (field, input) in fields {
            draft.apply(field.coerce(&input)?);
        }
        Ok(draft)
    }

    pub fn apply(&mut self, update: PlaylistUpdate) {
        match update {
            PlaylistUpdate::Name(v) => self.name = v,
            PlaylistUpdate::Description(v) => self.description = v,
            PlaylistUpdate::IsPublic(v) => self.is_public = v,
            PlaylistUpdate::CreatedBy(v) => self.created_by = v,
        }
    }
}

/// 允许单独更新的播放列表字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistField {
    Name,
    Description,
    IsPublic,
    CreatedBy,
}

impl PlaylistField {
    pub const ALL: [PlaylistField; 4] = [
        PlaylistField::Name,
        PlaylistField::Description,
        PlaylistField::IsPublic,
        PlaylistField::CreatedBy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistField::Name => "name",
            PlaylistField::Description => "description",
            PlaylistField::IsPublic => "is_public",
            PlaylistField::CreatedBy => "created_by",
        }
    }

    pub fn coerce(self, input: &FieldInput) -> Result<PlaylistUpdate, FieldError> {
        let name = self.as_str();
        Ok(match self {
            PlaylistField::Name => PlaylistUpdate::Name(input.to_required_text(name)?),
            PlaylistField::Description => PlaylistUpdate::Description(input.to_text()),
            PlaylistField::IsPublic => PlaylistUpdate::IsPublic(input.to_bool(name)?),
            PlaylistField::CreatedBy => PlaylistUpdate::CreatedBy(input.to_text()),
        })
    }
}

impl FromStr for PlaylistField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaylistField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for PlaylistField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistUpdate {
    Name(String),
    Description(String),
    IsPublic(bool),
    CreatedBy(String),
}

/// 播放列表仓储接口
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    async fn insert(&self, draft: &PlaylistDraft) -> Result<PlaylistId, PlaylistError>;

    async fn replace(&self, id: PlaylistId, draft: &PlaylistDraft) -> Result<bool, PlaylistError>;

    async fn update_field(
        &self,
        id: PlaylistId,
        update: &PlaylistUpdate,
    ) -> Result<bool, PlaylistError>;

    /// 删除播放列表，成员关系由外键级联删除
    async fn delete(&self, id: PlaylistId) -> Result<bool, PlaylistError>;
}
