//! Walks a laid-out tree (already measured against the printable width,
//! with unbounded height) and splits it across pages.
//!
//! A `Group` whose `breaks.keep_together` is unset is "flowable": its
//! children are paginated individually, so a long column of paragraphs
//! can span many pages. A `Group` with `keep_together` set (every grid
//! row cluster, or any container the caller marked atomic) is placed as
//! a single unit — it is pushed to a fresh page if it doesn't fit on the
//! current one, but never split internally.

use escp_types::{Dots, Paper, Rect};

use crate::output::{LaidContent, LaidNode, LaidOutDocument, Page, PositionedItem};

pub fn paginate(root: &LaidNode, paper: &Paper) -> LaidOutDocument {
    let printable = paper.printable_area();
    let mut pages = vec![Page::default()];
    let mut page_index: usize = 0;
    let mut page_top: Dots = 0;
    emit(root, 0, 0, &mut page_index, &mut page_top, &printable, &mut pages);
    LaidOutDocument { pages }
}

/// Starts a fresh page whose top edge maps to the absolute Y `y` — so
/// whatever sits at `y` lands at the top of the new page, not wherever a
/// uniform page-height chop would have put it.
fn break_to(y: Dots, page_index: &mut usize, page_top: &mut Dots) {
    *page_index += 1;
    *page_top = y;
}

fn ensure_page(pages: &mut Vec<Page>, index: usize) {
    while pages.len() <= index {
        pages.push(Page::default());
    }
}

fn current_page_is_empty(pages: &[Page], page_index: usize) -> bool {
    pages.get(page_index).map_or(true, |page| page.items.is_empty())
}

fn emit(
    node: &LaidNode,
    base_x: Dots,
    base_y: Dots,
    page_index: &mut usize,
    page_top: &mut Dots,
    printable: &Rect,
    pages: &mut Vec<Page>,
) {
    let y_root = base_y + node.rect.y;

    if node.breaks.break_before && !current_page_is_empty(pages, *page_index) {
        break_to(y_root, page_index, page_top);
    }

    let is_flowable_group = matches!(node.content, LaidContent::Group(_)) && !node.breaks.keep_together;

    if is_flowable_group {
        let x_root = base_x + node.rect.x;
        if let LaidContent::Group(children) = &node.content {
            for child in children {
                emit(child, x_root, y_root, page_index, page_top, printable, pages);
            }
        }
    } else {
        let local_y = y_root - *page_top;
        if local_y > 0 && local_y + node.rect.height > printable.height {
            break_to(y_root, page_index, page_top);
            if node.rect.height > printable.height {
                log::warn!("a node {} dots tall does not fit within a {} dot page; printing anyway", node.rect.height, printable.height);
            }
        }
        ensure_page(pages, *page_index);
        flatten_onto_page(node, base_x, base_y, *page_top, printable, &mut pages[*page_index]);
    }

    if node.breaks.break_after {
        break_to(y_root + node.rect.height, page_index, page_top);
    }
}

/// Places every drawable leaf under `node` onto one page, translating by
/// the page's top offset and the printable area's origin. Used only for
/// atomic subtrees, so it never itself decides to break a page.
fn flatten_onto_page(node: &LaidNode, base_x: Dots, base_y: Dots, page_top: Dots, printable: &Rect, page: &mut Page) {
    let x_root = base_x + node.rect.x;
    let y_root = base_y + node.rect.y;
    match &node.content {
        LaidContent::Group(children) => {
            for child in children {
                flatten_onto_page(child, x_root, y_root, page_top, printable, page);
            }
        }
        leaf => {
            page.items.push(PositionedItem {
                x: printable.x + x_root,
                y: printable.y + y_root - page_top,
                content: leaf.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escp_idf::BreakHints;
    use escp_style::Style;

    fn text_leaf(y: Dots, height: Dots) -> LaidNode {
        LaidNode {
            rect: Rect::new(0, y, 100, height),
            breaks: BreakHints::default(),
            content: LaidContent::Text { content: "x".into(), style: Style::default(), align: escp_style::Align::Left },
        }
    }

    #[test]
    fn tall_column_splits_across_pages() {
        let paper = Paper::new(2.0, 2.0, escp_types::Margins::all(0), 10).unwrap();
        let printable_height = paper.printable_area().height;
        let children = vec![
            text_leaf(0, printable_height - 10),
            text_leaf(printable_height - 10, 60),
        ];
        let root = LaidNode {
            rect: Rect::new(0, 0, 100, printable_height + 60),
            breaks: BreakHints::default(),
            content: LaidContent::Group(children),
        };
        let doc = paginate(&root, &paper);
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].items.len(), 1);
        assert_eq!(doc.pages[1].items.len(), 1);
        assert_eq!(doc.pages[1].items[0].y, paper.printable_area().y, "the overflow item lands at the new page's top margin, not a negative offset");
    }

    #[test]
    fn break_before_forces_a_fresh_page_even_if_it_would_fit() {
        let paper = Paper::new(2.0, 2.0, escp_types::Margins::all(0), 10).unwrap();
        let mut second = text_leaf(0, 20);
        second.breaks.break_before = true;
        let root = LaidNode {
            rect: Rect::new(0, 0, 100, 200),
            breaks: BreakHints::default(),
            content: LaidContent::Group(vec![text_leaf(0, 20), second]),
        };
        let doc = paginate(&root, &paper);
        assert_eq!(doc.pages.len(), 2);
    }

    #[test]
    fn break_before_on_the_first_leaf_does_not_produce_a_blank_leading_page() {
        let paper = Paper::new(2.0, 2.0, escp_types::Margins::all(0), 10).unwrap();
        let mut first = text_leaf(0, 20);
        first.breaks.break_before = true;
        let root = LaidNode {
            rect: Rect::new(0, 0, 100, 20),
            breaks: BreakHints::default(),
            content: LaidContent::Group(vec![first]),
        };
        let doc = paginate(&root, &paper);
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].items.len(), 1);
    }
}
