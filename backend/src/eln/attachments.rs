//! Extraction of files embedded in form data.
//!
//! The form renderer stores uploaded files inline as base64 data URLs
//! (`data:<mime>;base64,<payload>`). Before forwarding a submission, every such
//! value is located, decoded and named `<field><extension>`.

use super::UploadFile;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("data URL in field `{0}` has no payload")]
    MissingPayload(String),

    #[error("invalid base64 in field `{key}`: {source}")]
    Base64 {
        key: String,
        source: base64::DecodeError,
    },
}

/// A data URL found in form data, keyed by the field it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUrl {
    pub key: String,
    pub data: String,
}

/// Walks the form data and returns every data URL, in document order.
///
/// String items of an array are keyed `<field>-<n>` with `n` starting at 1;
/// objects inside arrays contribute their own field names.
pub fn collect_data_urls(data: &Value) -> Vec<DataUrl> {
    let mut out = Vec::new();
    match data {
        Value::Object(fields) => walk_object(fields, &mut out),
        Value::Array(items) => walk_array("item", items, &mut out),
        _ => {}
    }
    out
}

fn walk_object(fields: &Map<String, Value>, out: &mut Vec<DataUrl>) {
    for (key, value) in fields {
        match value {
            Value::String(s) if is_data_url(s) => out.push(DataUrl {
                key: key.clone(),
                data: s.clone(),
            }),
            Value::Object(nested) => walk_object(nested, out),
            Value::Array(items) => walk_array(key, items, out),
            _ => {}
        }
    }
}

fn walk_array(key: &str, items: &[Value], out: &mut Vec<DataUrl>) {
    for (idx, item) in items.iter().enumerate() {
        match item {
            Value::String(s) if is_data_url(s) => out.push(DataUrl {
                key: format!("{}-{}", key, idx + 1),
                data: s.clone(),
            }),
            Value::Object(nested) => walk_object(nested, out),
            Value::Array(inner) => walk_array(&format!("{}-{}", key, idx + 1), inner, out),
            _ => {}
        }
    }
}

fn is_data_url(value: &str) -> bool {
    value.starts_with("data:") && value.contains("base64")
}

pub fn decode_data_url(item: &DataUrl) -> Result<UploadFile, AttachmentError> {
    let (header, payload) = item
        .data
        .split_once(',')
        .ok_or_else(|| AttachmentError::MissingPayload(item.key.clone()))?;
    let mime = header
        .split(';')
        .next()
        .unwrap_or_default()
        .trim_start_matches("data:")
        .to_string();

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|source| AttachmentError::Base64 {
            key: item.key.clone(),
            source,
        })?;

    Ok(UploadFile {
        file_name: format!("{}{}", item.key, extension_for_mime(&mime)),
        mime: if mime.is_empty() {
            "application/octet-stream".to_string()
        } else {
            mime
        },
        bytes,
    })
}

/// File extension (with leading dot) for a MIME type; `.bin` when unknown.
pub fn extension_for_mime(mime: &str) -> String {
    let preferred = match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/tiff" => Some("tif"),
        "image/svg+xml" => Some("svg"),
        "text/plain" => Some("txt"),
        "text/csv" => Some("csv"),
        "text/html" => Some("html"),
        "application/pdf" => Some("pdf"),
        "application/json" => Some("json"),
        "application/zip" => Some("zip"),
        "application/msword" => Some("doc"),
        "application/vnd.ms-excel" => Some("xls"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Some("docx"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Some("xlsx"),
        _ => None,
    };

    preferred
        .or_else(|| mime_guess::get_mime_extensions_str(mime).and_then(|exts| exts.first().copied()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_else(|| ".bin".to_string())
}
