//! HTTP surface of the backend.
//!
//! All endpoints live under one `/api` scope. Each sub-module registers its own
//! routes through a `configure` function, mirroring the areas of the UI:
//!
//! - `schemas`: form schemas (`check_mode`, `get_schemas`, `save_schema`).
//! - `tables`: read access to the schema tables (`tables`, `data`, `columns`,
//!   `search`, `left-join`).
//! - `auth`: the admin login.
//! - `experiments`: forwarding to the electronic lab notebook (`get_tags`,
//!   `create_experiment`).
//! - `job_request`: the job-request e-mail workflow (`submit_job_request`).

pub mod auth;
pub mod experiments;
pub mod job_request;
pub mod schemas;
pub mod tables;

use crate::error::ApiError;
use actix_web::web::scope;
use actix_web::Scope;
use serde_json::Value;

/// The base path for all API endpoints.
const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .configure(schemas::configure)
        .configure(tables::configure)
        .configure(auth::configure)
        .configure(experiments::configure)
        .configure(job_request::configure)
}

/// Parses a form field that carries a JSON document as text.
pub(crate) fn parse_json_field(field: &str, raw: &str) -> Result<Value, ApiError> {
    serde_json::from_str(raw)
        .map_err(|e| ApiError::BadRequest(format!("field `{}` is not valid JSON: {}", field, e)))
}

/// `title` of a submitted schema, or empty when it has none.
pub(crate) fn schema_title(schema: &Value) -> &str {
    schema.get("title").and_then(Value::as_str).unwrap_or_default()
}
