use actix_cors::Cors;

/// JSON API 供页面脚本自动保存使用，跨域策略保持宽松
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600)
}
