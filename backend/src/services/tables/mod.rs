//! # Table Endpoints
//!
//! Read-only views over the tables created from saved schemas. Each request
//! opens its own connection on the blocking pool.
//!
//! - **`GET /tables`**: names of all tables.
//! - **`GET /data/{table}`**: every row of a table.
//! - **`GET /columns/{table}`**: column descriptions of a table.
//! - **`GET /search/{query}`**: rows of any table containing `query`
//!   (case-insensitive), tagged with their table.
//! - **`GET /left-join?table1&table2&column1&column2`**: rows of `table1`
//!   extended with the matching row of `table2`.

mod columns;
mod data;
mod left_join;
mod list;
mod search;

use crate::db::Database;
use crate::error::ApiError;
use crate::records::table_exists;
use actix_web::web::{get, ServiceConfig};
use rusqlite::Connection;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/tables", get().to(list::process))
        .route("/data/{table}", get().to(data::process))
        .route("/columns/{table}", get().to(columns::process))
        .route("/search/{query}", get().to(search::process))
        .route("/left-join", get().to(left_join::process));
}

/// Opens a connection and checks that `table` exists.
fn open_for_table(database: &Database, table: &str) -> Result<Connection, ApiError> {
    let conn = database.open()?;
    if !table_exists(&conn, table)? {
        return Err(ApiError::TableNotFound(table.to_string()));
    }
    Ok(conn)
}
