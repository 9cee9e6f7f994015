use crate::song::Song;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 播放列表基本信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub playlist_id: i32,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

/// 播放列表中的歌曲（歌曲信息 + 位置）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(flatten)]
    pub song: Song,
    pub position_in_playlist: i32,
    pub added_at: NaiveDateTime,
}

/// 播放列表完整信息（包含歌曲详情）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDetail {
    pub playlist: Playlist,
    pub tracks: Vec<PlaylistTrack>,
}

impl PlaylistDetail {
    pub fn song_count(&self) -> usize {
        self.tracks.len()
    }

    /// 有时长的歌曲总时长（秒）
    pub fn total_duration(&self) -> i64 {
        self.tracks
            .iter()
            .filter_map(|t| t.song.duration)
            .map(i64::from)
            .sum()
    }
}
