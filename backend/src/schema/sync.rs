use super::flatten::flatten;
use super::node::SchemaDocument;
use super::table::TableDefinition;
use crate::db::Database;
use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// One mutex per schema name, serializing saves of the same schema.
///
/// Saves of different schemas proceed in parallel.
#[derive(Clone, Default)]
pub struct SchemaLocks {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl SchemaLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` while holding the lock for `name`. Blocks the calling thread.
    pub fn with_lock<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        // clone the handle out so the map shard is not held while waiting
        let handle = self.locks.entry(name.to_string()).or_default().clone();
        let _guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}

/// Replaces the table named `name` with one matching `document`.
///
/// Drop and create run in one transaction: a failure leaves the previous table
/// untouched and concurrent readers never observe a missing table. All rows
/// of the previous table are discarded on success.
pub fn synchronize(
    db: &Database,
    name: &str,
    document: &SchemaDocument,
) -> rusqlite::Result<TableDefinition> {
    let flattened = flatten(&document.properties);
    for column in &flattened.collisions {
        log::warn!(
            "schema '{}': property '{}' is defined more than once; the last definition is used",
            name,
            column
        );
    }
    let definition = TableDefinition::from_flattened(name, &flattened);

    let mut conn = db.open()?;
    let tx = conn.transaction()?;
    log::debug!("{}", definition.drop_sql());
    tx.execute(&definition.drop_sql(), [])?;
    log::debug!("{}", definition.create_sql());
    tx.execute(&definition.create_sql(), [])?;
    tx.commit()?;

    log::info!(
        "table '{}' synchronized with {} columns",
        name,
        definition.columns.len()
    );
    Ok(definition)
}
