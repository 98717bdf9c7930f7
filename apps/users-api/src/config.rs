use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sql::SqlConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqlConfig::from_env()?; // DATABASE_URL defaults to a local SQLite file
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8089

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
