use serde_json::Value;

/// Escapes the five reserved markup characters in `text`.
///
/// Single pass: an already escaped string gets its `&` escaped again.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a JSON string value; any non-string value yields `""`.
pub fn escape_json_text(value: &Value) -> String {
    match value {
        Value::String(text) => escape_xml(text),
        _ => String::new(),
    }
}
