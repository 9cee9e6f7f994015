use crate::flash::Flash;
use crate::AppState;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::web;
use infra::config::AppConfigImpl;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

/// 使用已迁移的内存 sqlite 构造应用状态
pub async fn test_state() -> web::Data<AppState> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("Failed to open sqlite memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    web::Data::new(AppState::new(db, AppConfigImpl::default()))
}

pub fn flash_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    let raw = resp.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    Cookie::parse_encoded(raw.to_string()).ok()
}

pub fn flash_of<B>(resp: &ServiceResponse<B>) -> Option<Flash> {
    let cookie = flash_cookie(resp)?;
    serde_json::from_str(cookie.value()).ok()
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
