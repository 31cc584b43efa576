use crate::db::value_as_text;
use serde_json::Value;

/// Looks up `keyword` anywhere in the form data and returns its value as text.
///
/// Objects are searched depth-first in document order, including objects
/// inside arrays; when the keyword occurs more than once the last occurrence
/// wins.
pub fn find_keyword(data: &Value, keyword: &str) -> Option<String> {
    let mut found = None;
    visit(data, keyword, &mut found);
    found
}

fn visit(value: &Value, keyword: &str, found: &mut Option<String>) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                if key == keyword {
                    *found = Some(value_as_text(child));
                }
                visit(child, keyword, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                visit(item, keyword, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_nested_values() {
        let data = json!({
            "general": {"requester": {"email": "ada@example.org", "name": "Ada"}},
            "operator": "Jane Doe"
        });
        assert_eq!(find_keyword(&data, "email").as_deref(), Some("ada@example.org"));
        assert_eq!(find_keyword(&data, "operator").as_deref(), Some("Jane Doe"));
        assert_eq!(find_keyword(&data, "phone"), None);
    }

    #[test]
    fn last_occurrence_wins() {
        let data = json!({
            "email": "first@example.org",
            "contact": {"email": "second@example.org"},
            "items": [{"email": "third@example.org"}]
        });
        assert_eq!(find_keyword(&data, "email").as_deref(), Some("third@example.org"));
    }
}
