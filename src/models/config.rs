use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the portfolio HTTP service.
///
/// Sources are layered: `config/default.yaml`, then `config/{APP_ENV}.yaml`
/// when present, then `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path or URL of the SQLite database file.
    pub database_url: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // `.env` is optional.
        dotenvy::dotenv().ok();

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "app.db")?
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
