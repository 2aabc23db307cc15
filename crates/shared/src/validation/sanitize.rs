use serde_json::Value;

/// Trims surrounding whitespace, then drops every `<` and `>`.
pub fn sanitize_str(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect()
}

/// Sanitizes every string nested anywhere in `value`; keys and non-string
/// leaves are left untouched.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(sanitize_str(&text)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(record) => Value::Object(
            record
                .into_iter()
                .map(|(key, value)| (key, sanitize_value(value)))
                .collect(),
        ),
        other => other,
    }
}
