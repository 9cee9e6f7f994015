use crate::field::{FieldError, FieldInput};
use crate::value::SongId;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 歌曲领域错误
#[derive(Error, Debug)]
pub enum SongError {
    #[error("Database error: {0}")]
    DbErr(String),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// 新建或整体替换歌曲时提交的数据
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: Option<i32>,
    pub genre: String,
    pub release_year: Option<i32>,
    pub spotify_id: String,
    pub youtube_url: String,
}

impl SongDraft {
    /// 校验必填字段（title、artist），并去除首尾空白
    pub fn validated(mut self) -> Result<Self, SongError> {
        self.title = FieldInput::Text(self.title).to_required_text("title")?;
        self.artist = FieldInput::Text(self.artist).to_required_text("artist")?;
        Ok(self)
    }

    /// 由逐字段输入构造，缺省字段保持默认值
    pub fn from_fields<I>(fields: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (SongField, FieldInput)>,
    {
        let mut draft = SongDraft::default();
        for (field, input) in fields {
            draft.apply(field.coerce(&input)?);
        }
        Ok(draft)
    }

    pub fn apply(&mut self, update: SongUpdate) {
        match update {
            SongUpdate::Title(v) => self.title = v,
            SongUpdate::Artist(v) => self.artist = v,
            SongUpdate::Album(v) => self.album = v,
            SongUpdate::Duration(v) => self.duration = v,
            SongUpdate::Genre(v) => self.genre = v,
            SongUpdate::ReleaseYear(v) => self.release_year = v,
            SongUpdate::SpotifyId(v) => self.spotify_id = v,
            SongUpdate::YoutubeUrl(v) => self.youtube_url = v,
        }
    }
}

/// 允许单独更新的歌曲字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongField {
    Title,
    Artist,
    Album,
    Duration,
    Genre,
    ReleaseYear,
    SpotifyId,
    YoutubeUrl,
}

impl SongField {
    pub const ALL: [SongField; 8] = [
        SongField::Title,
        SongField::Artist,
        SongField::Album,
        SongField::Duration,
        SongField::Genre,
        SongField::ReleaseYear,
        SongField::SpotifyId,
        SongField::YoutubeUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SongField::Title => "title",
            SongField::Artist => "artist",
            SongField::Album => "album",
            SongField::Duration => "duration",
            SongField::Genre => "genre",
            SongField::ReleaseYear => "release_year",
            SongField::SpotifyId => "spotify_id",
            SongField::YoutubeUrl => "youtube_url",
        }
    }

    /// 把原始输入转换成带类型的更新
    pub fn coerce(self, input: &FieldInput) -> Result<SongUpdate, FieldError> {
        let name = self.as_str();
        Ok(match self {
            SongField::Title => SongUpdate::Title(input.to_required_text(name)?),
            SongField::Artist => SongUpdate::Artist(input.to_required_text(name)?),
            SongField::Album => SongUpdate::Album(input.to_text()),
            SongField::Duration => SongUpdate::Duration(input.to_optional_int(name)?),
            SongField::Genre => SongUpdate::Genre(input.to_text()),
            SongField::ReleaseYear => SongUpdate::ReleaseYear(input.to_optional_int(name)?),
            SongField::SpotifyId => SongUpdate::SpotifyId(input.to_text()),
            SongField::YoutubeUrl => SongUpdate::YoutubeUrl(input.to_text()),
        })
    }
}

impl FromStr for SongField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SongField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for SongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单字段更新，每个变体对应一列
#[derive(Debug, Clone, PartialEq)]
pub enum SongUpdate {
    Title(String),
    Artist(String),
    Album(String),
    Duration(Option<i32>),
    Genre(String),
    ReleaseYear(Option<i32>),
    SpotifyId(String),
    YoutubeUrl(String),
}

/// 歌曲仓储接口
///
/// 返回 `bool` 的方法表示是否命中了一行记录。
#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn insert(&self, draft: &SongDraft) -> Result<SongId, SongError>;

    async fn replace(&self, id: SongId, draft: &SongDraft) -> Result<bool, SongError>;

    async fn update_field(&self, id: SongId, update: &SongUpdate) -> Result<bool, SongError>;

    async fn delete(&self, id: SongId) -> Result<bool, SongError>;
}
