use dotenv::dotenv;
use std::env;
use std::num::NonZeroU32;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() first, so a `.env` file in the working directory is honoured.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pets.db".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = parse_max_connections(
            &env::var("MAX_DB_CONNECTIONS").unwrap_or_else(|_| "5".to_string()),
        )?;

        let connection_lifetime_secs = env::var("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logs the configuration
    pub fn print_info(&self) {
        info!(
            environment = %self.app_env,
            address = %self.address(),
            database = %self.database_url,
            max_connections = self.max_connections,
            connection_lifetime_secs = self.connection_lifetime_secs,
            "server configuration"
        );
    }
}

/// A pool needs at least one connection
fn parse_max_connections(raw: &str) -> Result<u32, String> {
    raw.parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())
}
