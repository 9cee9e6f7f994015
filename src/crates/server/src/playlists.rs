//! 播放列表页面与表单路由，挂在根路径

use crate::api::require_song_id;
use crate::consts::PLAYLISTS_PAGE;
use crate::error::ApiError;
use crate::flash::{redirect, render, Flash};
use crate::AppState;
use actix_web::web::{self, Form, Path};
use actix_web::{HttpRequest, HttpResponse};
use application::command::membership::AddSongOutcome;
use application::command::shared::Outcome;
use application::error::AppError;
use domain::field::FieldInput;
use domain::playlist::PlaylistDraft;
use log::warn;
use model::playlist::{Playlist, PlaylistTrack};
use model::song::Song;
use serde::{Deserialize, Serialize};

/// 播放列表表单，`is_public` 为复选框，出现即为 true
#[derive(Deserialize, Debug, Default)]
pub struct PlaylistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_public: Option<String>,
    #[serde(default)]
    pub created_by: String,
}

impl From<PlaylistForm> for PlaylistDraft {
    fn from(form: PlaylistForm) -> Self {
        PlaylistDraft {
            name: form.name,
            description: form.description,
            is_public: form.is_public.is_some(),
            created_by: form.created_by,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AddSongForm {
    #[serde(default)]
    pub song_id: String,
}

#[derive(Serialize, Debug)]
pub struct PlaylistsPage {
    pub playlists: Vec<Playlist>,
    pub songs: Vec<Song>,
    pub flash: Option<Flash>,
}

#[derive(Serialize, Debug)]
pub struct PlaylistDetailPage {
    pub playlist: Playlist,
    pub playlist_songs: Vec<PlaylistTrack>,
    pub song_count: usize,
    pub total_duration: i64,
    /// 添加歌曲时的候选列表，按标题排序
    pub all_songs: Vec<Song>,
    pub flash: Option<Flash>,
}

fn detail_page(id: i32) -> String {
    format!("/view/{}", id)
}

async fn show_playlists(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let page = PlaylistsPage {
        playlists: state.get_playlist().list().await?,
        songs: state.get_songs().recent().await?,
        flash: Flash::take(&req),
    };
    Ok(render(&req, &page))
}

async fn create_playlist(
    state: web::Data<AppState>,
    Form(form): Form<PlaylistForm>,
) -> HttpResponse {
    let flash = match state.playlist_service().create_playlist(form.into()).await {
        Ok(_) => Flash::success("New playlist created successfully!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(PLAYLISTS_PAGE, flash)
}

async fn view_playlist(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let Some(detail) = state.get_playlist().get_by_id(id).await? else {
        warn!("Playlist {} not found", id);
        return Ok(redirect(PLAYLISTS_PAGE, Flash::error("Playlist not found!")));
    };

    let page = PlaylistDetailPage {
        song_count: detail.song_count(),
        total_duration: detail.total_duration(),
        playlist: detail.playlist,
        playlist_songs: detail.tracks,
        all_songs: state.get_songs().by_title().await?,
        flash: Flash::take(&req),
    };
    Ok(render(&req, &page))
}

async fn update_playlist(
    state: web::Data<AppState>,
    path: Path<i32>,
    Form(form): Form<PlaylistForm>,
) -> HttpResponse {
    let flash = match state
        .playlist_service()
        .update_playlist(path.into_inner(), form.into())
        .await
    {
        Ok(Outcome::Done(())) => Flash::success("Playlist updated successfully!"),
        Ok(Outcome::NotFound) => Flash::error("Playlist not found!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(PLAYLISTS_PAGE, flash)
}

async fn delete_playlist(state: web::Data<AppState>, path: Path<i32>) -> HttpResponse {
    let flash = match state
        .playlist_service()
        .delete_playlist(path.into_inner())
        .await
    {
        Ok(Outcome::Done(())) => Flash::danger("Playlist deleted successfully!"),
        Ok(Outcome::NotFound) => Flash::error("Playlist not found!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(PLAYLISTS_PAGE, flash)
}

async fn add_song_to_playlist(
    state: web::Data<AppState>,
    path: Path<i32>,
    Form(form): Form<AddSongForm>,
) -> HttpResponse {
    let playlist_id = path.into_inner();
    let result = match require_song_id(&FieldInput::from(form.song_id)) {
        Ok(song_id) => {
            state
                .membership_service()
                .add_song(playlist_id, song_id)
                .await
        }
        Err(e) => Err(AppError::from(e)),
    };
    let flash = match result {
        Ok(AddSongOutcome::Added { .. }) => Flash::success("Song added to playlist successfully!"),
        Ok(AddSongOutcome::AlreadyInPlaylist) => Flash::warning("Song is already in this playlist!"),
        Ok(AddSongOutcome::NotFound) => Flash::error("Playlist or song not found!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(&detail_page(playlist_id), flash)
}

async fn remove_song_from_playlist(
    state: web::Data<AppState>,
    path: Path<(i32, i32)>,
) -> HttpResponse {
    let (playlist_id, song_id) = path.into_inner();
    let flash = match state
        .membership_service()
        .remove_song(playlist_id, song_id)
        .await
    {
        Ok(Outcome::Done(())) => Flash::info("Song removed from playlist!"),
        Ok(Outcome::NotFound) => Flash::warning("Song not found in playlist"),
        Err(e) => Flash::failure(&e),
    };
    redirect(&detail_page(playlist_id), flash)
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.service(
        web::resource("/")
            .route(web::get().to(show_playlists))
            .route(web::post().to(create_playlist)),
    )
    .route("/view/{playlist_id}", web::get().to(view_playlist))
    .route("/update_playlist/{playlist_id}", web::post().to(update_playlist))
    .route("/delete_playlist/{playlist_id}", web::post().to(delete_playlist))
    .route(
        "/add_song_to_playlist/{playlist_id}",
        web::post().to(add_song_to_playlist),
    )
    .route(
        "/remove_song_from_playlist/{playlist_id}/{song_id}",
        web::post().to(remove_song_from_playlist),
    );
}
