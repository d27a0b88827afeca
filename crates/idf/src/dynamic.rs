use crate::node::LayoutNode;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
}

/// A comparison consumed by `If`/`Switch`:
/// "a comparison `{ path, operator, value }`".
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub path: String,
    pub operator: Operator,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub value: Value,
    pub node: LayoutNode,
}
