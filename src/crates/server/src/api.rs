//! JSON API，供页面自动保存使用
//!
//! 找不到记录与重复添加都返回 200 和 `success: false`，只有输入错误返回 400。

use crate::consts;
use crate::error::ApiError;
use crate::AppState;
use actix_web::error::InternalError;
use actix_web::web::{self, Json, Path};
use actix_web::HttpResponse;
use application::command::membership::AddSongOutcome;
use application::command::shared::Outcome;
use domain::field::{FieldError, FieldInput};
use domain::playlist::{PlaylistDraft, PlaylistField};
use domain::song::{SongDraft, SongField};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_id: Option<i32>,
}

impl ApiReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            playlist_id: None,
            song_id: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(message)
        }
    }

    fn with_playlist_id(mut self, id: i32) -> Self {
        self.playlist_id = Some(id);
        self
    }

    fn with_song_id(mut self, id: i32) -> Self {
        self.song_id = Some(id);
        self
    }
}

/// 单字段更新请求
#[derive(Deserialize, Debug)]
pub struct UpdateFieldRequest {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Deserialize, Debug)]
pub struct AddSongRequest {
    #[serde(default)]
    pub song_id: Value,
}

/// JSON 值保留类型交给字段规则转换
pub fn field_input(value: &Value) -> FieldInput {
    match value {
        Value::Null => FieldInput::Null,
        Value::Bool(b) => FieldInput::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldInput::Int(i),
            None => FieldInput::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => FieldInput::Text(s.clone()),
        other => FieldInput::Text(other.to_string()),
    }
}

/// 要添加的歌曲 ID，接受数字或数字字符串
pub fn require_song_id(input: &FieldInput) -> Result<i32, FieldError> {
    input
        .to_optional_int("song_id")?
        .ok_or_else(|| FieldError::Required("song_id".to_string()))
}

fn playlist_inputs(body: &Map<String, Value>) -> Vec<(PlaylistField, FieldInput)> {
    PlaylistField::ALL
        .into_iter()
        .filter_map(|f| body.get(f.as_str()).map(|v| (f, field_input(v))))
        .collect()
}

fn song_inputs(body: &Map<String, Value>) -> Vec<(SongField, FieldInput)> {
    SongField::ALL
        .into_iter()
        .filter_map(|f| body.get(f.as_str()).map(|v| (f, field_input(v))))
        .collect()
}

async fn create_playlist(
    state: web::Data<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<ApiReply>, ApiError> {
    let draft = PlaylistDraft::from_fields(playlist_inputs(&body))?;
    let id = state.playlist_service().create_playlist(draft).await?;
    Ok(Json(
        ApiReply::success("Playlist created successfully!").with_playlist_id(id.as_i32()),
    ))
}

async fn update_playlist(
    state: web::Data<AppState>,
    path: Path<i32>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<ApiReply>, ApiError> {
    let outcome = state
        .playlist_service()
        .update_playlist_field(path.into_inner(), &req.field, &field_input(&req.value))
        .await?;
    Ok(Json(match outcome {
        Outcome::Done(message) => ApiReply::success(message),
        Outcome::NotFound => ApiReply::failure("Playlist not found"),
    }))
}

async fn delete_playlist(
    state: web::Data<AppState>,
    path: Path<i32>,
) -> Result<Json<ApiReply>, ApiError> {
    let outcome = state
        .playlist_service()
        .delete_playlist(path.into_inner())
        .await?;
    Ok(Json(match outcome {
        Outcome::Done(()) => ApiReply::success("Playlist deleted successfully!"),
        Outcome::NotFound => ApiReply::failure("Playlist not found"),
    }))
}

async fn add_song_to_playlist(
    state: web::Data<AppState>,
    path: Path<i32>,
    Json(req): Json<AddSongRequest>,
) -> Result<Json<ApiReply>, ApiError> {
    let song_id = require_song_id(&field_input(&req.song_id))?;
    let outcome = state
        .membership_service()
        .add_song(path.into_inner(), song_id)
        .await?;
    Ok(Json(match outcome {
        AddSongOutcome::Added { .. } => ApiReply::success("Song added to playlist successfully!"),
        AddSongOutcome::AlreadyInPlaylist => ApiReply::failure("Song is already in this playlist!"),
        AddSongOutcome::NotFound => ApiReply::failure("Playlist or song not found"),
    }))
}

async fn remove_song_from_playlist(
    state: web::Data<AppState>,
    path: Path<(i32, i32)>,
) -> Result<Json<ApiReply>, ApiError> {
    let (playlist_id, song_id) = path.into_inner();
    let outcome = state
        .membership_service()
        .remove_song(playlist_id, song_id)
        .await?;
    Ok(Json(match outcome {
        Outcome::Done(()) => ApiReply::success("Song removed from playlist!"),
        Outcome::NotFound => ApiReply::failure("Song not found in playlist"),
    }))
}

async fn create_song(
    state: web::Data<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<ApiReply>, ApiError> {
    let draft = SongDraft::from_fields(song_inputs(&body))?;
    let id = state.song_service().create_song(draft).await?;
    Ok(Json(
        ApiReply::success("Song created successfully!").with_song_id(id.as_i32()),
    ))
}

async fn update_song(
    state: web::Data<AppState>,
    path: Path<i32>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<ApiReply>, ApiError> {
    let outcome = state
        .song_service()
        .update_song_field(path.into_inner(), &req.field, &field_input(&req.value))
        .await?;
    Ok(Json(match outcome {
        Outcome::Done(message) => ApiReply::success(message),
        Outcome::NotFound => ApiReply::failure("Song not found"),
    }))
}

async fn delete_song(
    state: web::Data<AppState>,
    path: Path<i32>,
) -> Result<Json<ApiReply>, ApiError> {
    let outcome = state.song_service().delete_song(path.into_inner()).await?;
    Ok(Json(match outcome {
        Outcome::Done(()) => ApiReply::success("Song deleted successfully!"),
        Outcome::NotFound => ApiReply::failure("Song not found"),
    }))
}

/// 请求体不是合法 JSON 时同样返回 `{success: false, message}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("API request rejected: {}", err);
        let reply = ApiReply::failure(format!("Invalid request body: {}", err));
        InternalError::from_response(err, HttpResponse::BadRequest().json(reply)).into()
    })
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.service(
        web::scope(consts::URL_PATH_API)
            .app_data(json_config())
            .service(web::resource("/playlists").route(web::post().to(create_playlist)))
            .service(
                web::resource("/playlists/{id}")
                    .route(web::put().to(update_playlist))
                    .route(web::delete().to(delete_playlist)),
            )
            .service(
                web::resource("/playlists/{id}/songs").route(web::post().to(add_song_to_playlist)),
            )
            .service(
                web::resource("/playlists/{id}/songs/{song_id}")
                    .route(web::delete().to(remove_song_from_playlist)),
            )
            .service(web::resource("/songs").route(web::post().to(create_song)))
            .service(
                web::resource("/songs/{id}")
                    .route(web::put().to(update_song))
                    .route(web::delete().to(delete_song)),
            ),
    );
}
