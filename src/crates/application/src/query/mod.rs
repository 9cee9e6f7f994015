use thiserror::Error;

pub mod dao;
pub mod get_playlist;
pub mod get_songs;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Database error: {0}")]
    DbError(String),
}
