//! `Stack`: children placed sequentially along one axis, single cross
//! alignment shared by all of them. No space distribution between
//! children — that is `Flex`'s job.

use escp_idf::{ContainerProps, CrossAlign, Dimension, LayoutNode, StackDirection};
use escp_style::Style;
use escp_types::{BoxConstraints, Dots, Rect, Size};

use crate::dimension::{auto_margin_cross_pos, clamp_dimension, resolve_dimension};
use crate::error::LayoutError;
use crate::output::{LaidContent, LaidNode};
use crate::solve::layout_node;

/// A child's own cross-axis margin edges, `(start, end)`, if it carries one
/// (only `Stack`/`Flex` children do). `start`/`end` are left/right for a
/// column stack, top/bottom for a row.
fn cross_margin(child: &LayoutNode, is_column: bool) -> Option<(Dimension, Dimension)> {
    let margin = match child {
        LayoutNode::Stack { props, .. } | LayoutNode::Flex { props, .. } => props.margin,
        _ => return None,
    };
    Some(if is_column { (margin.left, margin.right) } else { (margin.top, margin.bottom) })
}

pub fn layout_stack(
    direction: StackDirection,
    children: &[LayoutNode],
    align: CrossAlign,
    props: &ContainerProps,
    inherited: &Style,
    constraints: BoxConstraints,
) -> Result<(Size, escp_idf::BreakHints, LaidContent), LayoutError> {
    let style = props.style.resolve(inherited);
    let padding = props.padding;
    let is_column = matches!(direction, StackDirection::Column);

    let (main_pad, cross_pad) = if is_column { (padding.y(), padding.x()) } else { (padding.x(), padding.y()) };
    let avail_main = if is_column { constraints.max_height } else { constraints.max_width };
    let avail_cross = if is_column { constraints.max_width } else { constraints.max_height };
    let content_avail_main = avail_main.map(|a| (a - main_pad).max(0));
    let content_avail_cross = avail_cross.map(|a| (a - cross_pad).max(0));

    let mut cursor_main: Dots = 0;
    let mut max_cross: Dots = 0;
    let mut laid_children = Vec::with_capacity(children.len());

    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            cursor_main += props.gap;
        }
        let child_constraints = if is_column {
            BoxConstraints { max_width: content_avail_cross, max_height: None }
        } else {
            BoxConstraints { max_width: None, max_height: content_avail_cross }
        };
        let (size, breaks, content) = layout_node(child, &style, child_constraints)?;
        let (child_main, child_cross) = if is_column { (size.height, size.width) } else { (size.width, size.height) };
        max_cross = max_cross.max(child_cross);

        let auto_margin = cross_margin(child, is_column).and_then(|(start, end)| auto_margin_cross_pos(start, end, content_avail_cross, child_cross));
        let cross_pos = auto_margin.unwrap_or(match align {
            CrossAlign::Start => 0,
            CrossAlign::Center => content_avail_cross.map(|a| ((a - child_cross) / 2).max(0)).unwrap_or(0),
            CrossAlign::End => content_avail_cross.map(|a| (a - child_cross).max(0)).unwrap_or(0),
        });

        let (x, y) = if is_column {
            (cross_pos + padding.left, cursor_main + padding.top)
        } else {
            (cursor_main + padding.left, cross_pos + padding.top)
        };

        laid_children.push(LaidNode { rect: Rect::new(x, y, size.width, size.height), breaks, content });
        cursor_main += child_main;
    }

    let (intrinsic_width, intrinsic_height) = if is_column {
        (max_cross + padding.x(), cursor_main + padding.y())
    } else {
        (cursor_main + padding.x(), max_cross + padding.y())
    };

    let width = resolve_dimension(props.width, constraints.max_width).unwrap_or(intrinsic_width);
    let height = resolve_dimension(props.height, constraints.max_height).unwrap_or(intrinsic_height);
    let width = clamp_dimension(width, props.min_width, props.max_width, constraints.max_width);
    let height = clamp_dimension(height, props.min_height, props.max_height, constraints.max_height);

    // A row stack's children share one Y band (they differ in X, not Y), so
    // pagination must treat them as a single unit the way it would a shared
    // Y-group of flex siblings. A column stack's children occupy distinct,
    // increasing Y positions and should paginate individually.
    let mut breaks = props.breaks;
    if !is_column {
        breaks.keep_together = true;
    }

    Ok((Size::new(width, height), breaks, LaidContent::Group(laid_children)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use escp_idf::Edges;
    use escp_style::{Cpi, Style, StyleOverride};

    fn char_text(ch: char) -> LayoutNode {
        LayoutNode::Text { content: ch.to_string(), style: StyleOverride::default(), align: None }
    }

    fn flex_row_with_margin(margin: Edges<Dimension>) -> LayoutNode {
        LayoutNode::Flex {
            children: vec![char_text('A')],
            row_gap: 0,
            justify: Default::default(),
            align_items: CrossAlign::Start,
            props: ContainerProps { margin, ..ContainerProps::default() },
        }
    }

    #[test]
    fn auto_left_right_margins_centre_a_child_in_a_column_stack() {
        let style = Style { cpi: Cpi::Ten, ..Style::default() };
        let children = vec![flex_row_with_margin(Edges { left: Dimension::Auto, right: Dimension::Auto, ..Edges::default() })];
        let constraints = BoxConstraints { max_width: Some(400), max_height: None };

        let (_, _, content) = layout_stack(StackDirection::Column, &children, CrossAlign::Start, &ContainerProps::default(), &style, constraints).unwrap();

        let LaidContent::Group(laid) = content else { panic!("expected a Group") };
        // one 'A' glyph at 10 cpi is 36 dots wide; 400 - 36 = 364, centred leaves 182 to its left.
        assert_eq!(laid[0].rect.x, 182);
    }

    #[test]
    fn a_leaf_child_with_no_container_props_ignores_auto_margin_and_uses_align() {
        let style = Style::default();
        let children = vec![char_text('A')];
        let constraints = BoxConstraints { max_width: Some(400), max_height: None };

        let (_, _, content) = layout_stack(StackDirection::Column, &children, CrossAlign::Center, &ContainerProps::default(), &style, constraints).unwrap();

        let LaidContent::Group(laid) = content else { panic!("expected a Group") };
        assert!(laid[0].rect.x > 0, "a leaf has no margin to carry, so the container's own align still applies");
    }
}
