//! Helpers for loosely typed tracker JSON.

use serde_json::Value;

/// JavaScript-style truthiness. The trackers use milestone numbers,
/// strings, and booleans interchangeably for "set".
pub(crate) fn truthy(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_tracker_conventions() {
        assert!(!truthy(&None));
        assert!(!truthy(&Some(Value::Null)));
        assert!(!truthy(&Some(json!(0))));
        assert!(!truthy(&Some(json!(""))));
        assert!(!truthy(&Some(json!(false))));
        assert!(truthy(&Some(json!(57))));
        assert!(truthy(&Some(json!("57"))));
        assert!(truthy(&Some(json!(true))));
    }
}
