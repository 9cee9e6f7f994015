use crate::query::QueryError;
use domain::field::FieldError;
use domain::membership::MembershipError;
use domain::playlist::PlaylistError;
use domain::song::SongError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Repository error: {0}: {1}")]
    RepositoryError(String, String),
    #[error("Query error: {0}")]
    QueryError(#[from] QueryError),
}

impl From<FieldError> for AppError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::UnknownField(name) => AppError::UnknownField(name),
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}

impl From<SongError> for AppError {
    fn from(e: SongError) -> Self {
        match e {
            SongError::DbErr(msg) => AppError::RepositoryError("Song".to_string(), msg),
            SongError::Field(e) => e.into(),
        }
    }
}

impl From<PlaylistError> for AppError {
    fn from(e: PlaylistError) -> Self {
        match e {
            PlaylistError::DbErr(msg) => AppError::RepositoryError("Playlist".to_string(), msg),
            PlaylistError::Field(e) => e.into(),
        }
    }
}

impl From<MembershipError> for AppError {
    fn from(e: MembershipError) -> Self {
        match e {
            MembershipError::PositionOverflow { .. } => AppError::InvalidInput(e.to_string()),
            MembershipError::DbErr(msg) => {
                AppError::RepositoryError("PlaylistSong".to_string(), msg)
            }
            other => AppError::RepositoryError("PlaylistSong".to_string(), other.to_string()),
        }
    }
}
