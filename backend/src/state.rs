//! Shared application state.
//!
//! `AppState` is built once in `main.rs` and registered as `web::Data`, so every
//! handler sees the same configuration, schema locks and outbound clients.
//!
//! - `config`: the immutable process configuration.
//! - `database` / `schemas`: handles to the SQLite file and the schema
//!   directory. They hold paths only; connections and files are opened per call.
//! - `locks`: per-schema-name mutexes serializing schema saves.
//! - `eln` / `mailer`: outbound integrations behind traits, replaced by fakes in
//!   tests.

use crate::config::AppConfig;
use crate::db::Database;
use crate::eln::{ElabFtwClient, ElnClient};
use crate::notify::{Mailer, SmtpMailer};
use crate::schema::{SchemaLocks, SchemaStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub database: Database,
    pub schemas: SchemaStore,
    pub locks: SchemaLocks,
    pub eln: Arc<dyn ElnClient>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// State wired to the real eLabFTW and SMTP clients.
    pub fn new(config: AppConfig) -> Self {
        Self::with_clients(config, Arc::new(ElabFtwClient::new()), Arc::new(SmtpMailer))
    }

    pub fn with_clients(
        config: AppConfig,
        eln: Arc<dyn ElnClient>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            database: Database::new(&config.database_path, config.db_busy_timeout),
            schemas: SchemaStore::new(&config.schema_dir),
            locks: SchemaLocks::new(),
            config: Arc::new(config),
            eln,
            mailer,
        }
    }
}
