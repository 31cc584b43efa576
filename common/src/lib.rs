//! Wire types shared between the lab forms backend and its clients.
//!
//! - `model`: records read from disk or the database (job-request configuration,
//!   column descriptions).
//! - `requests`: payloads accepted by the HTTP API.
//! - `responses`: payloads returned by the HTTP API.

pub mod model;
pub mod requests;
pub mod responses;

/// A single table row as an ordered column → value map.
pub type Row = serde_json::Map<String, serde_json::Value>;
