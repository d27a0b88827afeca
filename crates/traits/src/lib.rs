//! Pluggable seams between the core pipeline and its external collaborators.
//!
//! Template interpolation and filter-chain evaluation are treated as an
//! external collaborator: the core only requires that a `Template` node is
//! resolved to plain text before layout sees it. This crate defines the
//! abstract contract (mirroring a split between a compiled template type and
//! a parser trait) without committing to one expression grammar.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("unknown path '{0}' in data context")]
    UnknownPath(String),
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),
    #[error("template resolution error: {0}")]
    Other(String),
}

/// A filter function in a `{{path | filter:arg}}` chain: takes the current
/// value and the filter's string arguments, returns the transformed value.
pub type FilterFn = fn(&Value, &[&str]) -> Value;

/// Resolves a `{{path | filter:arg | ...}}` template string against a data
/// context. Implementors own the expression grammar and filter registry;
/// the core only calls `resolve` when it encounters a `Template` node.
pub trait TemplateResolver: Send + Sync {
    fn resolve(&self, template: &str, data: &Value) -> Result<String, TemplateError>;
}
