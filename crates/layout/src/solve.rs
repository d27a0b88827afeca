//! The top-level measurement/placement dispatcher: routes each
//! `LayoutNode` variant to its sizing logic and returns a `(Size,
//! BreakHints, LaidContent)` triple. Callers (the pagination pass, or a
//! child container positioning this node) wrap the result into a
//! `LaidNode` once they know where it sits.

use escp_idf::{BreakHints, LayoutNode};
use escp_style::Style;
use escp_types::{BoxConstraints, Size};

use crate::error::LayoutError;
use crate::flex::layout_flex;
use crate::grid::layout_grid;
use crate::measure::{barcode_size, image_size, line_size};
use crate::output::LaidContent;
use crate::stack::layout_stack;
use crate::table::layout_table;

pub fn layout_node(
    node: &LayoutNode,
    inherited: &Style,
    constraints: BoxConstraints,
) -> Result<(Size, BreakHints, LaidContent), LayoutError> {
    match node {
        LayoutNode::Text { content, style, align } => {
            let resolved = style.resolve(inherited);
            let size = crate::measure::text_size(content, &resolved);
            let content = LaidContent::Text { content: content.clone(), style: resolved, align: align.unwrap_or(resolved.align) };
            Ok((size, BreakHints::default(), content))
        }
        LayoutNode::Line { ch, length, direction } => {
            let main_avail = match direction {
                escp_idf::LineDirection::Horizontal => constraints.max_width,
                escp_idf::LineDirection::Vertical => constraints.max_height,
            };
            let size = line_size(*length, *direction, inherited, main_avail)?;
            let resolved_length = match direction {
                escp_idf::LineDirection::Horizontal => size.width,
                escp_idf::LineDirection::Vertical => size.height,
            };
            let content = LaidContent::Line { ch: *ch, style: *inherited, direction: *direction, length: resolved_length };
            Ok((size, BreakHints::default(), content))
        }
        LayoutNode::Stack { direction, children, align, props } => {
            layout_stack(*direction, children, *align, props, inherited, constraints)
        }
        LayoutNode::Flex { children, row_gap, justify, align_items, props } => {
            layout_flex(children, *row_gap, *justify, *align_items, props, inherited, constraints)
        }
        LayoutNode::Grid { rows, columns } => layout_grid(rows, columns, inherited, constraints),
        LayoutNode::Table { columns, header, rows, border } => {
            layout_table(columns, header.as_deref(), rows, *border, inherited, constraints)
        }
        LayoutNode::Spacer { size, .. } => {
            let s = size.unwrap_or(0);
            Ok((Size::new(s, s), BreakHints::default(), LaidContent::Group(Vec::new())))
        }
        LayoutNode::Image { pixels, width, height, dithering } => {
            let size = image_size(*width, *height);
            Ok((size, BreakHints::default(), LaidContent::Image { pixels: pixels.clone(), width: *width, height: *height, dithering: *dithering }))
        }
        LayoutNode::Barcode(barcode) => {
            let size = barcode_size(barcode);
            Ok((size, BreakHints::default(), LaidContent::Barcode(barcode.clone())))
        }
        LayoutNode::Template { .. } | LayoutNode::If { .. } | LayoutNode::Switch { .. } | LayoutNode::For { .. } => {
            Err(LayoutError::Generic("a dynamic node reached layout unresolved".into()))
        }
    }
}
