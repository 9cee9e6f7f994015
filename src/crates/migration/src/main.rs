use env_logger::Env;
use sea_orm_migration::prelude::*;

/// 数据库迁移命令行，连接串读取 `DATABASE_URL`
///
/// 例如：`DATABASE_URL=postgres://... cargo run -p migration -- up`
#[async_std::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Running schema migrations");
    cli::run_cli(migration::Migrator).await;
}
