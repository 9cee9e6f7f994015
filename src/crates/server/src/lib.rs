pub mod api;
pub mod consts;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod playlists;
pub mod songs;

#[cfg(test)]
pub(crate) mod test_support;

use actix_web::web;
use application::command::membership::MembershipService;
use application::command::playlist::PlaylistAppService;
use application::command::song::SongAppService;
use application::query::get_playlist::GetPlaylist;
use application::query::get_songs::GetSongs;
use infra::config::AppConfigImpl;
use infra::repository::postgres::command::membership::MembershipRepositoryImpl;
use infra::repository::postgres::command::playlist::PlaylistRepositoryImpl;
use infra::repository::postgres::command::song::SongRepositoryImpl;
use infra::repository::postgres::query::playlist::PlaylistDaoImpl;
use infra::repository::postgres::query::song::SongDaoImpl;
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;

pub struct AppState {
    pub app_cfg: AppConfigImpl,
    pub db: DatabaseConnection,
}

impl AppState {
    pub async fn init_db(app_cfg: &AppConfigImpl) -> Result<DatabaseConnection, DbErr> {
        let pool = app_cfg.database();
        let mut opt = ConnectOptions::new(app_cfg.database_url());
        opt.max_connections(pool.max_connections)
            .min_connections(pool.min_connections)
            .connect_timeout(pool.connect_timeout)
            .acquire_timeout(pool.acquire_timeout)
            .idle_timeout(pool.idle_timeout)
            .sqlx_logging(pool.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Info);

        let db = Database::connect(opt).await?;

        let backend = db.get_database_backend();
        db.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await?;

        info!("Database connection pool initialized successfully");
        Ok(db)
    }

    pub fn new(db: DatabaseConnection, app_cfg: AppConfigImpl) -> Self {
        Self { app_cfg, db }
    }

    pub fn playlist_service(&self) -> PlaylistAppService {
        PlaylistAppService::new(Arc::new(PlaylistRepositoryImpl::new(self.db.clone())))
    }

    pub fn song_service(&self) -> SongAppService {
        SongAppService::new(Arc::new(SongRepositoryImpl::new(self.db.clone())))
    }

    pub fn membership_service(&self) -> MembershipService {
        MembershipService::new(Arc::new(MembershipRepositoryImpl::new(self.db.clone())))
    }

    pub fn get_playlist(&self) -> GetPlaylist {
        GetPlaylist::new(Arc::new(PlaylistDaoImpl::new(self.db.clone())))
    }

    pub fn get_songs(&self) -> GetSongs {
        GetSongs::new(Arc::new(SongDaoImpl::new(self.db.clone())))
    }
}

/// 注册全部路由：JSON API、歌曲表单、播放列表表单（挂在根路径，最后注册）
pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.configure(api::configure_service)
        .configure(songs::configure_service)
        .configure(playlists::configure_service);
}
