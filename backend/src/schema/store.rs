//! File-side persistence of schemas: one pretty-printed `<name>.json` per
//! schema under the configured directory.

use super::node::SchemaDocument;
use super::SchemaError;
use regex::Regex;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Property injected into every saved schema, carrying its `$id`.
pub const SCHEMA_ID_PROPERTY: &str = "SchemaID";

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSchema {
    /// Path relative to the schema directory, `/`-separated, with `.json`.
    pub name: String,
    pub content: String,
}

/// A schema ready to be written: validated, with `SchemaID` injected.
#[derive(Debug, Clone)]
pub struct PreparedSchema {
    pub id: String,
    pub content: String,
    pub document: SchemaDocument,
}

/// A schema file written but not yet moved to its final name.
#[derive(Debug)]
pub struct StagedSchema {
    file: NamedTempFile,
    path: PathBuf,
}

impl StagedSchema {
    /// Atomically renames the staged file to `<name>.json`.
    pub fn commit(self) -> io::Result<PathBuf> {
        self.file.persist(&self.path)?;
        Ok(self.path)
    }
}

#[derive(Debug, Clone)]
pub struct SchemaStore {
    dir: PathBuf,
}

impl SchemaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    pub fn save(&self, name: &str, content: &str) -> io::Result<PathBuf> {
        self.stage(name, content)?.commit()
    }

    /// Writes `content` to a hidden temporary file in the schema directory.
    /// `<name>.json` is only replaced when the returned handle is committed;
    /// dropping it removes the temporary file.
    pub fn stage(&self, name: &str, content: &str) -> io::Result<StagedSchema> {
        fs::create_dir_all(&self.dir)?;
        let mut file = tempfile::Builder::new()
            .prefix(".staged-")
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(StagedSchema {
            file,
            path: self.path_for(name),
        })
    }

    /// Every `.json` file below the directory, sorted by name. A missing
    /// directory yields an empty list.
    pub fn list(&self) -> io::Result<Vec<StoredSchema>> {
        let mut out = Vec::new();
        if self.dir.is_dir() {
            collect_json_files(&self.dir, &self.dir, &mut out)?;
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}

fn collect_json_files(root: &Path, dir: &Path, out: &mut Vec<StoredSchema>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(root, &path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(StoredSchema {
                name,
                content: fs::read_to_string(&path)?,
            });
        }
    }
    Ok(())
}

/// Checks that a storage name is usable both as a file name and as a table
/// name.
pub fn validate_name(name: &str) -> Result<(), SchemaError> {
    let allowed = Regex::new(r"^[\p{L}\p{N}_\-. ]+$")
        .map_err(|_| SchemaError::InvalidName(name.to_string()))?;
    let reserved = name.starts_with('.') || name.to_ascii_lowercase().starts_with("sqlite_");
    if name.trim().is_empty() || reserved || !allowed.is_match(name) {
        return Err(SchemaError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validates a submitted schema and injects the `SchemaID` property.
///
/// `raw` is either the schema object itself or a string holding its JSON.
pub fn prepare(raw: &Value) -> Result<PreparedSchema, SchemaError> {
    let mut value = match raw {
        Value::String(text) if text.trim().is_empty() => return Err(SchemaError::MissingContent),
        Value::String(text) => serde_json::from_str::<Value>(text)?,
        other => other.clone(),
    };
    let root = value.as_object_mut().ok_or(SchemaError::NotAnObject)?;

    let id = match root.get("$id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(SchemaError::MissingId),
    };

    let properties = root
        .entry("properties")
        .or_insert_with(|| Value::Object(Default::default()))
        .as_object_mut()
        .ok_or(SchemaError::InvalidProperties)?;
    properties.insert(
        SCHEMA_ID_PROPERTY.to_string(),
        json!({
            "title": SCHEMA_ID_PROPERTY,
            "description": "Unique identifier for the schema",
            "type": "string",
            "enum": [id]
        }),
    );

    let document = SchemaDocument::from_value(&value)?;
    let content = serde_json::to_string_pretty(&value)?;
    Ok(PreparedSchema {
        id,
        content,
        document,
    })
}
