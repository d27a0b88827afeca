//! A dot/bracket JSON-path walker: `items[0].name`, `customer.address.city`.
//! Deliberately the property/index subset only — no predicates, no
//! wildcards, no slicing.

use escp_traits::TemplateError;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Key(String),
    Index(usize),
}

fn parse(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut current)));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut current)));
                }
                let mut index = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    index.push(c);
                }
                if let Ok(n) = index.trim().parse::<usize>() {
                    segments.push(Segment::Index(n));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        segments.push(Segment::Key(current));
    }
    segments
}

/// Looks up `path` in `data`, e.g. `"items[0].name"` or `"customer.city"`.
/// An empty path resolves to `data` itself, which lets `{{.}}` mean "the
/// current value" inside a `For` loop body.
pub fn resolve<'a>(path: &str, data: &'a Value) -> Result<&'a Value, TemplateError> {
    let path = path.trim();
    if path.is_empty() || path == "." {
        return Ok(data);
    }

    let mut current = data;
    for segment in parse(path) {
        current = match (&segment, current) {
            (Segment::Key(key), Value::Object(map)) => {
                map.get(key).ok_or_else(|| TemplateError::UnknownPath(path.to_string()))?
            }
            (Segment::Index(i), Value::Array(arr)) => {
                arr.get(*i).ok_or_else(|| TemplateError::UnknownPath(path.to_string()))?
            }
            _ => return Err(TemplateError::UnknownPath(path.to_string())),
        };
    }
    Ok(current)
}
