use serde::{Deserialize, Serialize};

/// Description of one table column, in the shape of a MySQL `DESCRIBE` row.
///
/// The data grid on the frontend only reads `name`; the remaining fields are
/// shown in the column picker of the join view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared SQL type, e.g. `VARCHAR(255)`.
    #[serde(rename = "type")]
    pub column_type: String,
    /// `"YES"` when the column accepts `NULL`, `"NO"` otherwise.
    pub null: String,
    /// `"PRI"` for primary key columns, empty otherwise.
    pub key: String,
    pub default: Option<String>,
    pub extra: String,
}
