//! 歌曲页面与表单路由，挂在 `/songs`

use crate::consts::{SONGS_PAGE, URL_PATH_SONGS};
use crate::error::ApiError;
use crate::flash::{redirect, render, Flash};
use crate::AppState;
use actix_web::web::{self, Form, Path};
use actix_web::{HttpRequest, HttpResponse};
use application::command::shared::Outcome;
use application::error::AppError;
use domain::field::{FieldError, FieldInput};
use domain::song::{SongDraft, SongField};
use model::song::Song;
use serde::{Deserialize, Serialize};

/// 歌曲表单，所有值都是文本，数字字段按字段规则转换
#[derive(Deserialize, Debug, Default)]
pub struct SongForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    pub duration: Option<String>,
    #[serde(default)]
    pub genre: String,
    pub release_year: Option<String>,
    #[serde(default)]
    pub spotify_id: String,
    #[serde(default)]
    pub youtube_url: String,
}

impl SongForm {
    pub fn into_draft(self) -> Result<SongDraft, FieldError> {
        SongDraft::from_fields([
            (SongField::Title, FieldInput::from(self.title)),
            (SongField::Artist, FieldInput::from(self.artist)),
            (SongField::Album, FieldInput::from(self.album)),
            (SongField::Duration, FieldInput::from(self.duration)),
            (SongField::Genre, FieldInput::from(self.genre)),
            (SongField::ReleaseYear, FieldInput::from(self.release_year)),
            (SongField::SpotifyId, FieldInput::from(self.spotify_id)),
            (SongField::YoutubeUrl, FieldInput::from(self.youtube_url)),
        ])
    }
}

#[derive(Serialize, Debug)]
pub struct SongsPage {
    pub songs: Vec<Song>,
    pub flash: Option<Flash>,
}

async fn show_songs(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let page = SongsPage {
        songs: state.get_songs().recent().await?,
        flash: Flash::take(&req),
    };
    Ok(render(&req, &page))
}

async fn create_song(state: web::Data<AppState>, Form(form): Form<SongForm>) -> HttpResponse {
    let result = match form.into_draft() {
        Ok(draft) => state.song_service().create_song(draft).await,
        Err(e) => Err(AppError::from(e)),
    };
    let flash = match result {
        Ok(_) => Flash::success("New song added successfully!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(SONGS_PAGE, flash)
}

async fn update_song(
    state: web::Data<AppState>,
    path: Path<i32>,
    Form(form): Form<SongForm>,
) -> HttpResponse {
    let result = match form.into_draft() {
        Ok(draft) => {
            state
                .song_service()
                .update_song(path.into_inner(), draft)
                .await
        }
        Err(e) => Err(AppError::from(e)),
    };
    let flash = match result {
        Ok(Outcome::Done(())) => Flash::success("Song updated successfully!"),
        Ok(Outcome::NotFound) => Flash::error("Song not found!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(SONGS_PAGE, flash)
}

async fn delete_song(state: web::Data<AppState>, path: Path<i32>) -> HttpResponse {
    let flash = match state.song_service().delete_song(path.into_inner()).await {
        Ok(Outcome::Done(())) => Flash::danger("Song deleted successfully!"),
        Ok(Outcome::NotFound) => Flash::error("Song not found!"),
        Err(e) => Flash::failure(&e),
    };
    redirect(SONGS_PAGE, flash)
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.service(
        web::scope(URL_PATH_SONGS)
            .service(
                web::resource("/")
                    .route(web::get().to(show_songs))
                    .route(web::post().to(create_song)),
            )
            .route("/update_song/{song_id}", web::post().to(update_song))
            .route("/delete_song/{song_id}", web::post().to(delete_song)),
    );
}
