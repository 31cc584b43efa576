//! JSON-Schema type names and the SQL column types they map to.

use std::fmt;

/// Type name of a terminal schema property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    /// `"file upload(string)"`, produced by the form editor for file inputs.
    FileUpload,
    Object,
    Array,
    Other(String),
}

impl JsonType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => JsonType::String,
            "number" => JsonType::Number,
            "integer" => JsonType::Integer,
            "boolean" => JsonType::Boolean,
            "file upload(string)" => JsonType::FileUpload,
            "object" => JsonType::Object,
            "array" => JsonType::Array,
            other => JsonType::Other(other.to_string()),
        }
    }

    pub fn sql_type(&self) -> SqlType {
        match self {
            JsonType::String | JsonType::FileUpload | JsonType::Other(_) => SqlType::Varchar255,
            JsonType::Number => SqlType::Float,
            JsonType::Integer => SqlType::Int,
            JsonType::Boolean => SqlType::Boolean,
            JsonType::Object | JsonType::Array => SqlType::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Varchar255,
    Float,
    Int,
    Boolean,
    Json,
}

impl SqlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlType::Varchar255 => "VARCHAR(255)",
            SqlType::Float => "FLOAT",
            SqlType::Int => "INT",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Json => "JSON",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
