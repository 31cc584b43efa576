//! Read-only queries over the schema tables.
//!
//! These back the data grid (`/api/tables`, `/api/data`, `/api/columns`), the
//! global search box and the join view. They take a borrowed connection and
//! never write.

use crate::db::{quote_ident, value_as_text, value_to_json};
use common::model::column::ColumnInfo;
use common::responses::{LeftJoinResponse, SearchHit};
use common::Row;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

/// Suffix appended to every column taken from the right-hand table of a join.
pub const JOINED_SUFFIX: &str = "_condition";

/// Names of all user tables, sorted.
pub fn list_tables(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}

pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

/// All rows of `table`, each as an ordered column → value map.
pub fn fetch_rows(conn: &Connection, table: &str) -> rusqlite::Result<Vec<Row>> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM {}", quote_ident(table)))?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Row::new();
        for (idx, name) in names.iter().enumerate() {
            record.insert(name.clone(), value_to_json(row.get_ref(idx)?));
        }
        out.push(record);
    }
    Ok(out)
}

pub fn describe_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", quote_ident(table)))?;
    let columns = stmt
        .query_map([], |row| {
            let not_null: i64 = row.get("notnull")?;
            let pk: i64 = row.get("pk")?;
            Ok(ColumnInfo {
                name: row.get("name")?,
                column_type: row.get("type")?,
                null: if not_null == 0 { "YES" } else { "NO" }.to_string(),
                key: if pk > 0 { "PRI" } else { "" }.to_string(),
                default: row.get("dflt_value")?,
                extra: String::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Case-insensitive substring search over every column of every table.
///
/// Each row is rendered as its cell texts joined by a single space, so a query
/// containing a space may match across two adjacent columns.
pub fn search(conn: &Connection, query: &str) -> rusqlite::Result<Vec<SearchHit>> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for table in list_tables(conn)? {
        for row in fetch_rows(conn, &table)? {
            if row_matches(&row, &needle) {
                hits.push(SearchHit {
                    table: table.clone(),
                    row,
                });
            }
        }
    }
    Ok(hits)
}

fn row_matches(row: &Row, needle: &str) -> bool {
    let haystack = row
        .values()
        .map(value_as_text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    haystack.contains(needle)
}

/// In-memory left join of two loaded tables.
///
/// `right` is indexed by `right_column`; on duplicate keys the later row wins.
/// Values are compared by their text rendering and `NULL` never matches.
pub fn left_join(
    left: Vec<Row>,
    right: Vec<Row>,
    left_column: &str,
    right_column: &str,
) -> LeftJoinResponse {
    let mut index: HashMap<String, Row> = HashMap::new();
    for row in right {
        if let Some(key) = join_key(&row, right_column) {
            index.insert(key, row);
        }
    }

    let rows: Vec<Row> = left
        .into_iter()
        .map(|mut row| {
            let matched = join_key(&row, left_column).and_then(|key| index.get(&key));
            if let Some(other) = matched {
                for (name, value) in other {
                    row.insert(format!("{}{}", name, JOINED_SUFFIX), value.clone());
                }
            }
            row
        })
        .collect();

    let columns = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    LeftJoinResponse { columns, rows }
}

fn join_key(row: &Row, column: &str) -> Option<String> {
    match row.get(column) {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(value_as_text(value)),
    }
}
