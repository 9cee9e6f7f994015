use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    /// 服务器配置
    server: RawServerConfig,
    /// 数据库连接池配置
    database: RawDatabaseConfig,
    /// 日志配置
    log: RawLogConfig,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            server: RawServerConfig::default(),
            database: RawDatabaseConfig::default(),
            log: RawLogConfig::default(),
        }
    }
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5533,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDatabaseConfig {
    max_connections: u32,
    min_connections: u32,
    connect_timeout_secs: u64,
    acquire_timeout_secs: u64,
    idle_timeout_secs: u64,
    sqlx_logging: bool,
}

impl Default for RawDatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 3,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 60,
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawLogConfig {
    /// 日志级别，`RUST_LOG` 优先
    level: String,
    /// 日志文件路径
    file: String,
}

impl Default for RawLogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "app.log".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    database_url: String,
    server: ServerConfig,
    database: DatabaseConfig,
    log: LogConfig,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let database = DatabaseConfig {
            max_connections: data.database.max_connections,
            min_connections: data.database.min_connections,
            connect_timeout: Duration::from_secs(data.database.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(data.database.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(data.database.idle_timeout_secs),
            sqlx_logging: data.database.sqlx_logging,
        };
        AppConfigImpl {
            database_url: data.database_url,
            server: ServerConfig {
                host: data.server.host,
                port: data.server.port,
            },
            database,
            log: LogConfig {
                level: data.log.level,
                file: data.log.file,
            },
        }
    }

    /// 加载顺序：`.env` -> `config.toml`（可选）-> `APP__*` 环境变量
    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<AppConfigImpl, Box<dyn Error>> {
        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        Ok(AppConfigImpl::new(raw))
    }

    pub fn database_url(&self) -> String {
        self.database_url.clone()
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone()
    }
}

impl Default for AppConfigImpl {
    fn default() -> Self {
        AppConfigImpl::new(RawConfig::default())
    }
}
