//! Backend of the lab forms application.
//!
//! Saved JSON Schemas become SQLite tables, the tables are exposed read-only to
//! the UI, and submitted forms are forwarded to an eLabFTW notebook or turned
//! into job-request e-mails.

pub mod config;
pub mod db;
pub mod eln;
pub mod error;
pub mod notify;
pub mod records;
pub mod schema;
pub mod services;
pub mod state;

use actix_web::web;
use state::AppState;

/// Registers the payload limits, the shared state and every `/api` route.
///
/// Used by `main` and by the integration tests, so both run the same app.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: AppState) {
    let limit = state.config.payload_limit;
    cfg.app_data(web::JsonConfig::default().limit(limit))
        .app_data(web::FormConfig::default().limit(limit))
        .app_data(web::Data::new(state))
        .service(services::configure_routes());
}
