//! `Flex`: a single horizontal row with CSS-flexbox-style main-axis
//! distribution (`Justify`) and per-child cross-axis alignment
//! (`align_items`). `Dimension::Fill` containers and flex-weighted
//! `Spacer`s share out whatever main-axis space is left after every
//! other child has been measured.

use escp_idf::{ContainerProps, CrossAlign, Dimension, Justify, LayoutNode};
use escp_style::Style;
use escp_types::{BoxConstraints, Dots, Rect, Size};

use crate::dimension::{auto_margin_cross_pos, clamp_dimension, resolve_dimension};
use crate::error::LayoutError;
use crate::output::{LaidContent, LaidNode};
use crate::solve::layout_node;

fn fill_weight(child: &LayoutNode) -> Option<f32> {
    match child {
        LayoutNode::Spacer { flex: Some(w), .. } => Some(*w),
        LayoutNode::Stack { props, .. } | LayoutNode::Flex { props, .. } if props.width == Some(Dimension::Fill) => Some(1.0),
        _ => None,
    }
}

/// A child's own top/bottom margin, the cross-axis edges for a flex row
/// (only `Stack`/`Flex` children carry one).
fn cross_margin(child: &LayoutNode) -> Option<(Dimension, Dimension)> {
    match child {
        LayoutNode::Stack { props, .. } | LayoutNode::Flex { props, .. } => Some((props.margin.top, props.margin.bottom)),
        _ => None,
    }
}

pub fn layout_flex(
    children: &[LayoutNode],
    row_gap: Dots,
    justify: Justify,
    align_items: CrossAlign,
    props: &ContainerProps,
    inherited: &Style,
    constraints: BoxConstraints,
) -> Result<(Size, escp_idf::BreakHints, LaidContent), LayoutError> {
    let style = props.style.resolve(inherited);
    let padding = props.padding;
    let avail_width = constraints.max_width.map(|a| (a - padding.x()).max(0));
    let avail_height = constraints.max_height.map(|a| (a - padding.y()).max(0));

    let n = children.len();
    let mut sizes: Vec<Option<Size>> = vec![None; n];
    let mut contents: Vec<Option<(escp_idf::BreakHints, LaidContent)>> = (0..n).map(|_| None).collect();
    let weights: Vec<Option<f32>> = children.iter().map(fill_weight).collect();

    let total_gap = if n > 1 { row_gap * (n as Dots - 1) } else { 0 };
    let mut fixed_total: Dots = 0;

    for (i, child) in children.iter().enumerate() {
        if weights[i].is_some() {
            continue;
        }
        let child_constraints = BoxConstraints { max_width: None, max_height: avail_height };
        let (size, breaks, content) = layout_node(child, &style, child_constraints)?;
        fixed_total += size.width;
        sizes[i] = Some(size);
        contents[i] = Some((breaks, content));
    }

    let total_weight: f32 = weights.iter().flatten().sum();
    let remaining = avail_width.map(|a| (a - fixed_total - total_gap).max(0));

    if total_weight > 0.0 {
        let pool = remaining.unwrap_or(0);
        for (i, child) in children.iter().enumerate() {
            let Some(w) = weights[i] else { continue };
            let alloc = ((pool as f32) * w / total_weight).round() as Dots;
            let child_constraints = BoxConstraints { max_width: Some(alloc), max_height: avail_height };
            let (size, breaks, content) = layout_node(child, &style, child_constraints)?;
            sizes[i] = Some(size);
            contents[i] = Some((breaks, content));
        }
    }

    let main_sizes: Vec<Dots> = sizes.iter().map(|s| s.unwrap_or(Size::zero()).width).collect();
    let sum_main: Dots = main_sizes.iter().sum();
    let leftover = if total_weight > 0.0 {
        0
    } else {
        avail_width.map(|a| (a - sum_main - total_gap).max(0)).unwrap_or(0)
    };

    let (mut cursor, extra_gap) = match justify {
        Justify::Start => (0, 0),
        Justify::Center => (leftover / 2, 0),
        Justify::End => (leftover, 0),
        Justify::SpaceBetween => (0, if n > 1 { leftover / (n as Dots - 1) } else { 0 }),
        Justify::SpaceAround => {
            let g = if n > 0 { leftover / n as Dots } else { 0 };
            (g / 2, g)
        }
        Justify::SpaceEvenly => {
            let g = leftover / (n as Dots + 1);
            (g, g)
        }
    };

    let max_cross = sizes.iter().map(|s| s.unwrap_or(Size::zero()).height).max().unwrap_or(0);
    let mut laid_children = Vec::with_capacity(n);
    for (i, size) in sizes.into_iter().enumerate() {
        let size = size.unwrap_or(Size::zero());
        let (breaks, content) = contents[i].take().unwrap_or((escp_idf::BreakHints::default(), LaidContent::Group(Vec::new())));
        let auto_margin = cross_margin(&children[i]).and_then(|(start, end)| auto_margin_cross_pos(start, end, avail_height, size.height));
        let cross_pos = auto_margin.unwrap_or(match align_items {
            CrossAlign::Start => 0,
            CrossAlign::Center => avail_height.map(|a| ((a - size.height) / 2).max(0)).unwrap_or(0),
            CrossAlign::End => avail_height.map(|a| (a - size.height).max(0)).unwrap_or(0),
        });
        laid_children.push(LaidNode {
            rect: Rect::new(cursor + padding.left, cross_pos + padding.top, size.width, size.height),
            breaks,
            content,
        });
        cursor += size.width + row_gap + extra_gap;
    }

    let intrinsic_width = sum_main + total_gap + padding.x();
    let intrinsic_height = max_cross + padding.y();
    let width = resolve_dimension(props.width, constraints.max_width).unwrap_or(intrinsic_width);
    let height = resolve_dimension(props.height, constraints.max_height).unwrap_or(intrinsic_height);
    let width = clamp_dimension(width, props.min_width, props.max_width, constraints.max_width);
    let height = clamp_dimension(height, props.min_height, props.max_height, constraints.max_height);

    // Flex is always a horizontal row: every child shares the row's Y band,
    // so pagination treats the whole row as one Y-group rather than
    // breaking between individual siblings.
    let breaks = escp_idf::BreakHints { keep_together: true, ..props.breaks };

    Ok((Size::new(width, height), breaks, LaidContent::Group(laid_children)))
}
