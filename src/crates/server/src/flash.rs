//! 基于 cookie 的 flash 消息
//!
//! 表单提交后重定向前写入 `flash` cookie，下一次页面请求读取并清除。

use crate::consts;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use application::error::AppError;
use log::error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Info,
    Warning,
    Danger,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Danger, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Error, message)
    }

    /// 表单操作失败时的提示，数据库等内部错误只记录日志不回显
    pub fn failure(err: &AppError) -> Self {
        match err {
            AppError::InvalidInput(_) | AppError::UnknownField(_) => Self::error(err.to_string()),
            _ => {
                error!("Form request failed: {}", err);
                Self::error("Something went wrong, please try again.")
            }
        }
    }

    /// 读取请求中的 flash，cookie 内容无法解析时忽略
    pub fn take(req: &HttpRequest) -> Option<Flash> {
        let cookie = req.cookie(consts::FLASH_COOKIE)?;
        serde_json::from_str(cookie.value()).ok()
    }

    fn to_cookie(&self) -> Option<Cookie<'static>> {
        let value = serde_json::to_string(self).ok()?;
        let mut cookie = Cookie::new(consts::FLASH_COOKIE, value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_max_age(Duration::seconds(consts::FLASH_COOKIE_EXPIRY));
        Some(cookie)
    }
}

/// 302 重定向并携带 flash
pub fn redirect(location: &str, flash: Flash) -> HttpResponse {
    let mut builder = HttpResponse::Found();
    builder.insert_header((header::LOCATION, location));
    // JSON 含引号等字符，需要百分号编码后写入
    if let Some(cookie) = flash.to_cookie() {
        builder.insert_header((header::SET_COOKIE, cookie.encoded().to_string()));
    }
    builder.finish()
}

/// 输出页面模型；请求带有 flash cookie 时一并清除，无论能否解析
pub fn render<T: Serialize>(req: &HttpRequest, model: &T) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    if req.cookie(consts::FLASH_COOKIE).is_some() {
        let mut removal = Cookie::new(consts::FLASH_COOKIE, "");
        removal.set_path("/");
        removal.make_removal();
        builder.cookie(removal);
    }
    builder.json(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_redirect_sets_encoded_cookie() {
        let resp = redirect("/songs/", Flash::warning("Song is already in this playlist!"));
        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/songs/");

        let raw = resp
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        let cookie = Cookie::parse_encoded(raw.to_string()).unwrap();
        let flash: Flash = serde_json::from_str(cookie.value()).unwrap();
        assert_eq!(flash.category, FlashCategory::Warning);
        assert_eq!(flash.message, "Song is already in this playlist!");
    }

    #[test]
    fn test_take_flash_from_request() {
        let flash = Flash::danger("Playlist deleted successfully!");
        let req = TestRequest::default()
            .cookie(flash.to_cookie().unwrap())
            .to_http_request();
        assert_eq!(Flash::take(&req), Some(flash));

        let req = TestRequest::default()
            .cookie(Cookie::new(consts::FLASH_COOKIE, "not json"))
            .to_http_request();
        assert_eq!(Flash::take(&req), None);
    }

    #[test]
    fn test_render_clears_unreadable_flash() {
        let req = TestRequest::default()
            .cookie(Cookie::new(consts::FLASH_COOKIE, "not json"))
            .to_http_request();
        let resp = render(&req, &serde_json::json!({}));
        let raw = resp
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        let cookie = Cookie::parse(raw.to_string()).unwrap();
        assert_eq!(cookie.name(), consts::FLASH_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));

        let resp = render(&TestRequest::default().to_http_request(), &serde_json::json!({}));
        assert!(resp.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn test_failure_hides_database_errors() {
        let flash = Flash::failure(&AppError::RepositoryError(
            "Song".to_string(),
            "connection refused".to_string(),
        ));
        assert_eq!(flash.category, FlashCategory::Error);
        assert!(!flash.message.contains("connection refused"));

        let flash = Flash::failure(&AppError::InvalidInput("title is required".to_string()));
        assert!(flash.message.contains("title is required"));
    }
}
