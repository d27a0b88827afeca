//! The built-in filter registry: `{{path | filter:arg | ...}}`.

use escp_traits::FilterFn;
use serde_json::{json, Value};
use std::collections::HashMap;

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string().trim_matches('"').to_string(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn uppercase(value: &Value, _args: &[&str]) -> Value {
    json!(as_text(value).to_uppercase())
}

fn lowercase(value: &Value, _args: &[&str]) -> Value {
    json!(as_text(value).to_lowercase())
}

fn capitalize(value: &Value, _args: &[&str]) -> Value {
    let text = as_text(value);
    let mut chars = text.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    json!(capitalized)
}

fn trim(value: &Value, _args: &[&str]) -> Value {
    json!(as_text(value).trim())
}

fn truncate(value: &Value, args: &[&str]) -> Value {
    let text = as_text(value);
    let limit: usize = args.first().and_then(|a| a.parse().ok()).unwrap_or(text.chars().count());
    json!(text.chars().take(limit).collect::<String>())
}

fn default(value: &Value, args: &[&str]) -> Value {
    if matches!(value, Value::Null) {
        json!(args.first().copied().unwrap_or(""))
    } else {
        value.clone()
    }
}

fn currency(value: &Value, args: &[&str]) -> Value {
    let symbol = args.first().copied().unwrap_or("$");
    match as_number(value) {
        Some(n) => json!(format!("{symbol}{n:.2}")),
        None => json!(as_text(value)),
    }
}

fn number(value: &Value, _args: &[&str]) -> Value {
    match as_number(value) {
        Some(n) => json!(format!("{n:.2}")),
        None => json!(as_text(value)),
    }
}

fn percent(value: &Value, _args: &[&str]) -> Value {
    match as_number(value) {
        Some(n) => json!(format!("{:.0}%", n * 100.0)),
        None => json!(as_text(value)),
    }
}

/// Builds the default filter registry: `uppercase, lowercase, capitalize,
/// trim, truncate:n, default:"v", currency:"sym", number, percent`.
pub fn default_registry() -> HashMap<&'static str, FilterFn> {
    let mut registry: HashMap<&'static str, FilterFn> = HashMap::new();
    registry.insert("uppercase", uppercase);
    registry.insert("lowercase", lowercase);
    registry.insert("capitalize", capitalize);
    registry.insert("trim", trim);
    registry.insert("truncate", truncate);
    registry.insert("default", default);
    registry.insert("currency", currency);
    registry.insert("number", number);
    registry.insert("percent", percent);
    registry
}
