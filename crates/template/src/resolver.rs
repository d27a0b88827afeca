//! The reference `TemplateResolver`: scans a string for `{{path | filter |
//! filter:arg}}` placeholders and substitutes each with the resolved,
//! filtered value. Text outside `{{ }}` passes through unchanged.

use escp_traits::{FilterFn, TemplateError, TemplateResolver};
use serde_json::Value;
use std::collections::HashMap;

use crate::filters::default_registry;
use crate::path;

pub struct Resolver {
    filters: HashMap<&'static str, FilterFn>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self { filters: default_registry() }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or overrides a filter by name.
    pub fn with_filter(mut self, name: &'static str, f: FilterFn) -> Self {
        self.filters.insert(name, f);
        self
    }

    fn eval_expr(&self, expr: &str, data: &Value) -> Result<String, TemplateError> {
        let mut parts = expr.split('|');
        let path_part = parts.next().unwrap_or("").trim();
        let mut value = path::resolve(path_part, data)?.clone();

        for filter_part in parts {
            let filter_part = filter_part.trim();
            let (name, arg) = match filter_part.split_once(':') {
                Some((name, arg)) => (name.trim(), Some(arg.trim().trim_matches('"'))),
                None => (filter_part, None),
            };
            let f = self.filters.get(name).ok_or_else(|| TemplateError::UnknownFilter(name.to_string()))?;
            let args: &[&str] = match &arg {
                Some(a) => std::slice::from_ref(a),
                None => &[],
            };
            value = f(&value, args);
        }

        Ok(match &value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string().trim_matches('"').to_string(),
        })
    }
}

impl TemplateResolver for Resolver {
    fn resolve(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| {
                TemplateError::Other(format!("unterminated expression in '{template}'"))
            })?;
            let expr = &after_open[..end];
            out.push_str(&self.eval_expr(expr, data)?);
            rest = &after_open[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn substitutes_a_bare_path() {
        let resolver = Resolver::new();
        let data = json!({"name": "Bolt"});
        assert_eq!(resolver.resolve("Part: {{name}}", &data).unwrap(), "Part: Bolt");
    }

    #[test]
    fn applies_a_filter_chain() {
        let resolver = Resolver::new();
        let data = json!({"name": "  bolt  "});
        assert_eq!(resolver.resolve("{{name | trim | uppercase}}", &data).unwrap(), "BOLT");
    }

    #[test]
    fn applies_a_filter_with_an_argument() {
        let resolver = Resolver::new();
        let data = json!({"price": 4.5});
        assert_eq!(resolver.resolve("{{price | currency:\"€\"}}", &data).unwrap(), "€4.50");
    }

    #[test]
    fn text_outside_braces_passes_through() {
        let resolver = Resolver::new();
        let data = json!({"n": 3});
        assert_eq!(resolver.resolve("qty={{n}} units", &data).unwrap(), "qty=3 units");
    }

    #[test]
    fn unknown_filter_is_an_error() {
        let resolver = Resolver::new();
        let data = json!({"n": 3});
        assert!(resolver.resolve("{{n | nope}}", &data).is_err());
    }
}
