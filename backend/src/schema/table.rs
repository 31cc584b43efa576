use super::flatten::Flattened;
use super::types::SqlType;
use crate::db::quote_ident;

/// Bookkeeping column appended to every schema table.
pub const DOCUMENT_LOCATION: &str = "documentlocation";

/// Relational shape derived from a flattened schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    /// Columns in creation order, ending with `documentlocation`.
    pub columns: Vec<(String, SqlType)>,
}

impl TableDefinition {
    /// A flattened property named like the bookkeeping column (compared
    /// case-insensitively, as SQLite does) is dropped in its favour.
    pub fn from_flattened(name: &str, flattened: &Flattened) -> Self {
        let mut columns: Vec<(String, SqlType)> = flattened
            .columns
            .iter()
            .filter(|(column, _)| !column.eq_ignore_ascii_case(DOCUMENT_LOCATION))
            .map(|(column, json_type)| (column.clone(), json_type.sql_type()))
            .collect();
        columns.push((DOCUMENT_LOCATION.to_string(), SqlType::Varchar255));

        Self {
            name: name.to_string(),
            columns,
        }
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", quote_ident(&self.name))
    }

    pub fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|(column, sql_type)| format!("{} {}", quote_ident(column), sql_type))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE {} ({})", quote_ident(&self.name), columns)
    }
}
