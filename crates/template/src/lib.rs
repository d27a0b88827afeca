//! Reference data-binding engine.
//!
//! `escp-idf`'s `Template`/`If`/`Switch`/`For` variants describe *what* to
//! resolve; this crate owns *how*: a dot/bracket path walker, a filter
//! registry, and the `{{path | filter:arg}}` expression grammar, tying them
//! together behind `escp-traits::TemplateResolver` so a caller can swap in a
//! different expression language without touching the layout tree.

pub mod dynamic;
pub mod filters;
pub mod path;
pub mod resolver;

pub use dynamic::resolve_tree;
pub use escp_traits::{FilterFn, TemplateError, TemplateResolver};
pub use resolver::Resolver;
