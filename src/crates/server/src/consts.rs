pub const URL_PATH_API: &str = "/api";
pub const URL_PATH_SONGS: &str = "/songs";

pub const PLAYLISTS_PAGE: &str = "/";
pub const SONGS_PAGE: &str = "/songs/";

pub const FLASH_COOKIE: &str = "flash";
/// flash 只需存活到下一次页面请求
pub const FLASH_COOKIE_EXPIRY: i64 = 60;
