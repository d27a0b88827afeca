//! S1/S2 from the render-emitter property table: a flex row's children are
//! measured and positioned correctly before any byte is emitted.

use escp_idf::{ContainerProps, CrossAlign, Dimension, Edges, Justify, LayoutNode, StackDirection};
use escp_style::{Cpi, Style, StyleOverride};
use escp_types::{inches_to_dots, BoxConstraints};

use crate::flex::layout_flex;
use crate::output::LaidContent;

fn char_text(ch: char) -> LayoutNode {
    LayoutNode::Text { content: ch.to_string(), style: StyleOverride::default(), align: None }
}

fn rects(content: &LaidContent) -> Vec<escp_types::Dots> {
    match content {
        LaidContent::Group(children) => children.iter().map(|c| c.rect.x).collect(),
        other => panic!("expected a Group, got {other:?}"),
    }
}

#[test]
fn s1_start_justified_children_sit_contiguously_at_zero_gap() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let children = vec![char_text('A'), char_text('B'), char_text('C')];
    let constraints = BoxConstraints::with_width(inches_to_dots(8.5));

    let (_, breaks, content) = layout_flex(
        &children,
        0,
        Justify::Start,
        CrossAlign::Start,
        &ContainerProps::default(),
        &style,
        constraints,
    )
    .unwrap();

    assert_eq!(rects(&content), vec![0, 36, 72]);
    assert!(breaks.keep_together, "a flex row's children share one Y band and must paginate as a unit");
}

#[test]
fn s2_end_justified_children_hug_the_right_edge() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let children = vec![char_text('A'), char_text('B'), char_text('C')];
    let page_width = inches_to_dots(8.5);
    assert_eq!(page_width, 3060);
    let constraints = BoxConstraints::with_width(page_width);

    let (_, _, content) = layout_flex(
        &children,
        0,
        Justify::End,
        CrossAlign::Start,
        &ContainerProps::default(),
        &style,
        constraints,
    )
    .unwrap();

    let xs = rects(&content);
    assert_eq!(xs[0], 2952);
    assert_eq!(xs[1], 2988);
    assert_eq!(xs[2], 3024);
}

fn stack_with_margin(margin: Edges<Dimension>) -> LayoutNode {
    LayoutNode::Stack {
        direction: StackDirection::Column,
        children: vec![char_text('A')],
        align: CrossAlign::Start,
        props: ContainerProps { margin, ..ContainerProps::default() },
    }
}

#[test]
fn auto_margin_on_both_cross_edges_centres_the_child_over_align_items() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let children = vec![stack_with_margin(Edges { top: Dimension::Auto, bottom: Dimension::Auto, ..Edges::default() })];
    let constraints = BoxConstraints { max_width: Some(360), max_height: Some(200) };

    let (_, _, content) = layout_flex(&children, 0, Justify::Start, CrossAlign::Start, &ContainerProps::default(), &style, constraints).unwrap();

    let LaidContent::Group(laid) = content else { panic!("expected a Group") };
    // a single-line child is 60 dots tall; 200 - 60 = 140, centred leaves 70 above it.
    assert_eq!(laid[0].rect.y, 70);
}

#[test]
fn auto_margin_on_one_cross_edge_pushes_to_the_opposite_edge() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let children = vec![stack_with_margin(Edges { top: Dimension::Auto, bottom: Dimension::Fixed(0), ..Edges::default() })];
    let constraints = BoxConstraints { max_width: Some(360), max_height: Some(200) };

    let (_, _, content) = layout_flex(&children, 0, Justify::Start, CrossAlign::Start, &ContainerProps::default(), &style, constraints).unwrap();

    let LaidContent::Group(laid) = content else { panic!("expected a Group") };
    assert_eq!(laid[0].rect.y, 140, "auto top margin with a fixed bottom pushes the child all the way down");
}
