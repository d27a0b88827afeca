//! Walks a `LayoutNode` tree and resolves `Template`/`If`/`Switch`/`For`
//! nodes against a data context, producing a tree with no dynamic variants
//! left for the layout solver to trip over.

use escp_idf::{ContainerProps, Operator, StackDirection};
use escp_idf::LayoutNode;
use escp_traits::{TemplateError, TemplateResolver};
use serde_json::Value;

use crate::path;

/// An empty leaf standing in for an `If`/`Switch` branch that resolved to
/// nothing.
fn nothing() -> LayoutNode {
    LayoutNode::Spacer { size: Some(0), flex: None }
}

pub fn resolve_tree(node: &LayoutNode, data: &Value, resolver: &dyn TemplateResolver) -> Result<LayoutNode, TemplateError> {
    match node {
        LayoutNode::Text { .. } | LayoutNode::Line { .. } | LayoutNode::Spacer { .. } | LayoutNode::Image { .. } | LayoutNode::Barcode(_) => {
            Ok(node.clone())
        }

        LayoutNode::Stack { direction, children, align, props } => Ok(LayoutNode::Stack {
            direction: *direction,
            children: resolve_children(children, data, resolver)?,
            align: *align,
            props: props.clone(),
        }),

        LayoutNode::Flex { children, row_gap, justify, align_items, props } => Ok(LayoutNode::Flex {
            children: resolve_children(children, data, resolver)?,
            row_gap: *row_gap,
            justify: *justify,
            align_items: *align_items,
            props: props.clone(),
        }),

        LayoutNode::Grid { rows, columns } => {
            let mut resolved_rows = Vec::with_capacity(rows.len());
            for row in rows {
                resolved_rows.push(escp_idf::GridRow {
                    cells: resolve_children(&row.cells, data, resolver)?,
                    height: row.height,
                    keep_with_next: row.keep_with_next,
                    break_before: row.break_before,
                });
            }
            Ok(LayoutNode::Grid { rows: resolved_rows, columns: columns.clone() })
        }

        LayoutNode::Table { columns, header, rows, border } => {
            let resolved_header = match header {
                Some(cells) => Some(resolve_children(cells, data, resolver)?),
                None => None,
            };
            let mut resolved_rows = Vec::with_capacity(rows.len());
            for row in rows {
                resolved_rows.push(escp_idf::GridRow {
                    cells: resolve_children(&row.cells, data, resolver)?,
                    height: row.height,
                    keep_with_next: row.keep_with_next,
                    break_before: row.break_before,
                });
            }
            Ok(LayoutNode::Table { columns: columns.clone(), header: resolved_header, rows: resolved_rows, border: *border })
        }

        LayoutNode::Template { template, data: override_data } => {
            let scope = override_data.as_ref().unwrap_or(data);
            let text = resolver.resolve(template, scope)?;
            Ok(LayoutNode::Text { content: text, style: Default::default(), align: None })
        }

        LayoutNode::If { condition, then, or_else } => {
            if evaluate_condition(condition, data)? {
                resolve_tree(then, data, resolver)
            } else if let Some(or_else) = or_else {
                resolve_tree(or_else, data, resolver)
            } else {
                Ok(nothing())
            }
        }

        LayoutNode::Switch { path: switch_path, cases, default } => {
            let value = path::resolve(switch_path, data)?;
            if let Some(case) = cases.iter().find(|case| &case.value == value) {
                resolve_tree(&case.node, data, resolver)
            } else if let Some(default) = default {
                resolve_tree(default, data, resolver)
            } else {
                Ok(nothing())
            }
        }

        LayoutNode::For { items, binding, render, separator } => {
            let collection = path::resolve(items, data)?;
            let entries = match collection {
                Value::Array(arr) => arr.clone(),
                other => return Err(TemplateError::Other(format!("For items path '{items}' did not resolve to an array, got {other}"))),
            };

            let mut children = Vec::with_capacity(entries.len());
            for (idx, entry) in entries.iter().enumerate() {
                if idx > 0 {
                    if let Some(separator) = separator {
                        children.push(resolve_tree(separator, data, resolver)?);
                    }
                }
                let scope = loop_scope(data, binding, entry);
                children.push(resolve_tree(render, &scope, resolver)?);
            }

            Ok(LayoutNode::Stack {
                direction: StackDirection::Column,
                children,
                align: Default::default(),
                props: ContainerProps::default(),
            })
        }
    }
}

fn resolve_children(children: &[LayoutNode], data: &Value, resolver: &dyn TemplateResolver) -> Result<Vec<LayoutNode>, TemplateError> {
    children.iter().map(|child| resolve_tree(child, data, resolver)).collect()
}

/// A `For` loop's body sees the enclosing object's fields plus its own
/// bound name, which shadows an outer field of the same name.
fn loop_scope(data: &Value, binding: &str, entry: &Value) -> Value {
    match data {
        Value::Object(map) => {
            let mut scope = map.clone();
            scope.insert(binding.to_string(), entry.clone());
            Value::Object(scope)
        }
        _ => serde_json::json!({ binding: entry }),
    }
}

fn evaluate_condition(condition: &escp_idf::Condition, data: &Value) -> Result<bool, TemplateError> {
    let actual = path::resolve(&condition.path, data)?;
    Ok(compare(actual, condition.operator, &condition.value))
}

fn compare(actual: &Value, operator: Operator, expected: &Value) -> bool {
    match operator {
        Operator::Eq => actual == expected,
        Operator::Ne => actual != expected,
        Operator::Gt | Operator::Lt | Operator::Gte | Operator::Lte => {
            let (Some(a), Some(b)) = (actual.as_f64(), expected.as_f64()) else {
                return false;
            };
            match operator {
                Operator::Gt => a > b,
                Operator::Lt => a < b,
                Operator::Gte => a >= b,
                Operator::Lte => a <= b,
                Operator::Eq | Operator::Ne => unreachable!(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use escp_idf::{Condition, SwitchCase};
    use serde_json::json;

    fn text(s: &str) -> LayoutNode {
        LayoutNode::Text { content: s.into(), style: Default::default(), align: None }
    }

    #[test]
    fn template_node_resolves_to_text() {
        let resolver = Resolver::new();
        let data = json!({"name": "Bolt"});
        let node = LayoutNode::Template { template: "{{name}}".into(), data: None };
        let resolved = resolve_tree(&node, &data, &resolver).unwrap();
        assert_eq!(resolved, text("Bolt"));
    }

    #[test]
    fn if_node_picks_the_matching_branch() {
        let resolver = Resolver::new();
        let data = json!({"qty": 5});
        let node = LayoutNode::If {
            condition: Condition { path: "qty".into(), operator: Operator::Gt, value: json!(1) },
            then: Box::new(text("many")),
            or_else: Some(Box::new(text("one"))),
        };
        assert_eq!(resolve_tree(&node, &data, &resolver).unwrap(), text("many"));
    }

    #[test]
    fn if_node_without_else_resolves_to_nothing() {
        let resolver = Resolver::new();
        let data = json!({"qty": 0});
        let node = LayoutNode::If {
            condition: Condition { path: "qty".into(), operator: Operator::Gt, value: json!(1) },
            then: Box::new(text("many")),
            or_else: None,
        };
        assert_eq!(resolve_tree(&node, &data, &resolver).unwrap(), nothing());
    }

    #[test]
    fn switch_node_matches_by_value() {
        let resolver = Resolver::new();
        let data = json!({"status": "late"});
        let node = LayoutNode::Switch {
            path: "status".into(),
            cases: vec![
                SwitchCase { value: json!("ok"), node: text("On time") },
                SwitchCase { value: json!("late"), node: text("Delayed") },
            ],
            default: Some(Box::new(text("Unknown"))),
        };
        assert_eq!(resolve_tree(&node, &data, &resolver).unwrap(), text("Delayed"));
    }

    #[test]
    fn for_node_expands_one_child_per_item() {
        let resolver = Resolver::new();
        let data = json!({"items": [{"name": "Bolt"}, {"name": "Nut"}]});
        let node = LayoutNode::For {
            items: "items".into(),
            binding: "item".into(),
            render: Box::new(LayoutNode::Template { template: "{{item.name}}".into(), data: None }),
            separator: None,
        };
        let resolved = resolve_tree(&node, &data, &resolver).unwrap();
        match resolved {
            LayoutNode::Stack { children, .. } => {
                assert_eq!(children, vec![text("Bolt"), text("Nut")]);
            }
            other => panic!("expected a Stack, got {other:?}"),
        }
    }
}
