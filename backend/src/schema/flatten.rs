use super::node::SchemaNode;
use super::types::JsonType;
use indexmap::IndexMap;

/// A schema's properties inlined into one namespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    /// Property name → terminal type, in first-seen order and spelling.
    pub columns: IndexMap<String, JsonType>,
    /// Names seen more than once, compared ASCII case-insensitively like SQLite
    /// column names. The later definition replaced the earlier one.
    pub collisions: Vec<String>,
}

/// Recursively inlines nested object properties.
///
/// Nested names are kept as-is (no parent prefix). A name that appears at two
/// places, in any letter case, keeps the spelling and position of its first
/// occurrence and the type of its last.
pub fn flatten(properties: &IndexMap<String, SchemaNode>) -> Flattened {
    let mut out = Flattened::default();
    flatten_into(properties, &mut out);
    out
}

fn flatten_into(properties: &IndexMap<String, SchemaNode>, out: &mut Flattened) {
    for (name, node) in properties {
        match node {
            SchemaNode::Object(nested) => flatten_into(nested, out),
            SchemaNode::Leaf(json_type) => {
                let existing = out
                    .columns
                    .iter_mut()
                    .find(|(seen, _)| seen.eq_ignore_ascii_case(name));
                match existing {
                    Some((_, slot)) => {
                        *slot = json_type.clone();
                        out.collisions.push(name.clone());
                    }
                    None => {
                        out.columns.insert(name.clone(), json_type.clone());
                    }
                }
            }
        }
    }
}
