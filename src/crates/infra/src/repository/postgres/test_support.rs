use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// 创建已完成迁移的内存 sqlite 数据库
///
/// 内存库只存在于单个连接中，连接池必须限制为 1。
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("Failed to open sqlite memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}
