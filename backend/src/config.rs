//! Process-wide configuration.
//!
//! `AppConfig` is built once at startup and handed to every component through
//! `AppState`. The job-request configuration is *not* part of it: that file is
//! re-read on every request that needs it (see `notify::load_job_request_conf`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database holding one table per saved schema.
    pub database_path: PathBuf,
    /// Directory holding one `<name>.json` file per saved schema.
    pub schema_dir: PathBuf,
    pub jobrequest_conf: PathBuf,
    /// Built frontend, served for every non-API path when it exists.
    pub static_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub db_busy_timeout: Duration,
    /// Maximum size in bytes of JSON and form request bodies.
    pub payload_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_path: PathBuf::from("experiment_data.sqlite"),
            schema_dir: PathBuf::from("./schemas"),
            jobrequest_conf: PathBuf::from("./conf/jobrequest-conf.json"),
            static_dir: PathBuf::from("./build"),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            db_busy_timeout: Duration::from_millis(5000),
            payload_limit: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and overlays `LABFORMS_*` environment variables
    /// on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("LABFORMS_HOST") {
            config.host = v;
        }
        if let Some(v) = lookup("LABFORMS_PORT") {
            config.port = parse("LABFORMS_PORT", v)?;
        }
        if let Some(v) = lookup("LABFORMS_DATABASE") {
            config.database_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("LABFORMS_SCHEMA_DIR") {
            config.schema_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("LABFORMS_JOBREQUEST_CONF") {
            config.jobrequest_conf = PathBuf::from(v);
        }
        if let Some(v) = lookup("LABFORMS_STATIC_DIR") {
            config.static_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("LABFORMS_ADMIN_USER") {
            config.admin_username = v;
        }
        if let Some(v) = lookup("LABFORMS_ADMIN_PASSWORD") {
            config.admin_password = v;
        }
        if let Some(v) = lookup("LABFORMS_DB_BUSY_TIMEOUT_MS") {
            config.db_busy_timeout = Duration::from_millis(parse("LABFORMS_DB_BUSY_TIMEOUT_MS", v)?);
        }
        if let Some(v) = lookup("LABFORMS_PAYLOAD_LIMIT") {
            config.payload_limit = parse("LABFORMS_PAYLOAD_LIMIT", v)?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
