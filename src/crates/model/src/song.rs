use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 歌曲目录条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub song_id: i32,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: Option<i32>,
    pub genre: String,
    pub release_year: Option<i32>,
    pub spotify_id: String,
    pub youtube_url: String,
    pub created_at: NaiveDateTime,
}
