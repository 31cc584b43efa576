//! # Schema → Table Mapping
//!
//! Turns a saved JSON-Schema document into the relational table that mirrors it.
//!
//! ## Pipeline
//!
//! 1.  **Parsing** (`node`): the raw JSON is read into a `SchemaDocument`, whose
//!     `properties` are an explicit tree of `SchemaNode`s. An `object` property
//!     with its own `properties` becomes a branch; everything else is a leaf
//!     carrying its `JsonType`.
//!
//! 2.  **Flattening** (`flatten`): branches are inlined into one namespace.
//!     Nested names are *not* prefixed with their parent, so the same name at two
//!     depths collides; the property processed last wins and the collision is
//!     reported.
//!
//! 3.  **Type mapping** (`types`): each leaf type maps to a fixed SQL type.
//!
//! 4.  **Table definition** (`table`): the flattened columns plus the trailing
//!     `documentlocation` bookkeeping column.
//!
//! 5.  **Synchronization** (`sync`): `DROP` + `CREATE` in a single transaction,
//!     serialized per schema name. Synchronizing is destructive: existing rows
//!     are discarded.
//!
//! The file side lives in `store`: one `<name>.json` per schema, written with an
//! injected `SchemaID` property.

pub mod flatten;
pub mod node;
pub mod store;
pub mod sync;
pub mod table;
pub mod types;

pub use flatten::{flatten, Flattened};
pub use node::{SchemaDocument, SchemaNode};
pub use store::{SchemaStore, StoredSchema};
pub use sync::{synchronize, SchemaLocks};
pub use table::TableDefinition;
pub use types::{JsonType, SqlType};

use thiserror::Error;

/// Reasons a submitted schema is rejected before anything is written.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema name or content not provided")]
    MissingContent,

    #[error("$id is missing in the schema")]
    MissingId,

    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("schema must be a JSON object")]
    NotAnObject,

    #[error("schema `properties` must be a JSON object")]
    InvalidProperties,

    #[error("property `{0}` must be described by a JSON object")]
    InvalidProperty(String),

    #[error("invalid schema name: {0:?}")]
    InvalidName(String),
}
