use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::RetryConfig;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Everything the engine reads from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    /// Apply pending migrations before serving. `RUN_MIGRATIONS=false` skips them.
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?, // HOST, PORT, SHUTDOWN_TIMEOUT_SECS
            database: PostgresConfig::from_env()?, // DATABASE_URL is required
            retry: RetryConfig::from_env()?,
            run_migrations: env_parse_or("RUN_MIGRATIONS", true)?,
        })
    }
}
