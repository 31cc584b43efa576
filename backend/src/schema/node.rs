use super::types::JsonType;
use super::SchemaError;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// One property of a schema: either a terminal type or an object with nested
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Leaf(JsonType),
    Object(IndexMap<String, SchemaNode>),
}

/// The parts of a JSON-Schema document the table mapping cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Top-level properties in declaration order.
    pub properties: IndexMap<String, SchemaNode>,
}

impl SchemaDocument {
    pub fn parse(content: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let root = value.as_object().ok_or(SchemaError::NotAnObject)?;

        let properties = match root.get("properties") {
            None => IndexMap::new(),
            Some(Value::Object(props)) => parse_properties(props)?,
            Some(_) => return Err(SchemaError::InvalidProperties),
        };

        Ok(Self {
            id: root.get("$id").and_then(Value::as_str).map(str::to_string),
            title: root.get("title").and_then(Value::as_str).map(str::to_string),
            properties,
        })
    }
}

fn parse_properties(props: &Map<String, Value>) -> Result<IndexMap<String, SchemaNode>, SchemaError> {
    props
        .iter()
        .map(|(name, descriptor)| Ok((name.clone(), SchemaNode::from_descriptor(name, descriptor)?)))
        .collect()
}

impl SchemaNode {
    /// Reads a property descriptor. Only `type` (and `properties` for objects)
    /// is inspected; a missing `type` reads as `string`, and a `type` array
    /// uses its first non-`null` entry.
    pub fn from_descriptor(name: &str, descriptor: &Value) -> Result<Self, SchemaError> {
        let fields = descriptor
            .as_object()
            .ok_or_else(|| SchemaError::InvalidProperty(name.to_string()))?;

        let json_type = JsonType::from_name(type_name(fields.get("type")));
        match (&json_type, fields.get("properties")) {
            (JsonType::Object, Some(Value::Object(nested))) => {
                Ok(SchemaNode::Object(parse_properties(nested)?))
            }
            _ => Ok(SchemaNode::Leaf(json_type)),
        }
    }
}

fn type_name(value: Option<&Value>) -> &str {
    match value {
        Some(Value::String(name)) => name.as_str(),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null")
            .unwrap_or("string"),
        _ => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_nested_objects_into_branches() {
        let doc = SchemaDocument::from_value(&json!({
            "$id": "sem-request",
            "title": "SEM request",
            "properties": {
                "sample": {"type": "string"},
                "stage": {
                    "type": "object",
                    "properties": {"tilt": {"type": "number"}}
                },
                "settings": {"type": "object"}
            }
        }))
        .unwrap();

        assert_eq!(doc.id.as_deref(), Some("sem-request"));
        assert_eq!(doc.title.as_deref(), Some("SEM request"));
        assert_eq!(doc.properties["sample"], SchemaNode::Leaf(JsonType::String));
        match &doc.properties["stage"] {
            SchemaNode::Object(nested) => {
                assert_eq!(nested["tilt"], SchemaNode::Leaf(JsonType::Number))
            }
            other => panic!("expected object, got {:?}", other),
        }
        // an object without nested properties stays a terminal JSON column
        assert_eq!(doc.properties["settings"], SchemaNode::Leaf(JsonType::Object));
    }

    #[test]
    fn reads_missing_and_array_types() {
        let doc = SchemaDocument::from_value(&json!({
            "properties": {
                "untyped": {"title": "no type"},
                "nullable": {"type": ["null", "integer"]}
            }
        }))
        .unwrap();
        assert!(doc.id.is_none());
        assert_eq!(doc.properties["untyped"], SchemaNode::Leaf(JsonType::String));
        assert_eq!(doc.properties["nullable"], SchemaNode::Leaf(JsonType::Integer));
    }

    #[test]
    fn keeps_declaration_order() {
        let doc = SchemaDocument::parse(
            r#"{"properties": {"zeta": {"type": "string"}, "alpha": {"type": "string"}, "mid": {"type": "string"}}}"#,
        )
        .unwrap();
        let names: Vec<_> = doc.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(SchemaDocument::parse("[1, 2]"), Err(SchemaError::NotAnObject)));
        assert!(matches!(SchemaDocument::parse("{"), Err(SchemaError::InvalidJson(_))));
        assert!(matches!(
            SchemaDocument::parse(r#"{"properties": []}"#),
            Err(SchemaError::InvalidProperties)
        ));
        assert!(matches!(
            SchemaDocument::parse(r#"{"properties": {"name": "string"}}"#),
            Err(SchemaError::InvalidProperty(name)) if name == "name"
        ));
    }
}
