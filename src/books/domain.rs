use serde_json::Value;
use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    // names of required fields that are absent or falsy
    fn missing_fields(&self) -> Vec<&'static str>;
}

// null, false, zero and the empty string are falsy, everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::is_truthy;

    #[tokio::test]
    async fn test_should_check_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
