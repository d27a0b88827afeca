//! Drives a small document through the real render crate, then replays the
//! resulting bytes through this crate's independent interpreter, and checks
//! that both agree on where the cursor ends up. A render-emitter bug that
//! moves the cursor incorrectly, or an interpreter bug that decodes a
//! position command wrong, would show up as a mismatch here even though
//! neither side alone would fail its own unit tests.

use escp_layout::measure::text_size;
use escp_layout::{LaidContent, LaidOutDocument, Page, PositionedItem};
use escp_style::{Align, Cpi, Style};
use escp_types::{Margins, Paper};

use crate::interpreter::Interpreter;

fn text_item(x: i32, y: i32, content: &str, style: Style) -> PositionedItem {
    PositionedItem { x, y, content: LaidContent::Text { content: content.into(), style, align: Align::Left } }
}

#[test]
fn final_cursor_position_matches_between_the_renderer_and_the_interpreter() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let paper = Paper::new(8.5, 11.0, Margins::all(0), 66).unwrap();

    let doc = LaidOutDocument {
        pages: vec![Page {
            items: vec![text_item(0, 0, "HELLO", style), text_item(0, 60, "WORLD", style)],
        }],
    };

    let bytes = escp_render::render(&doc, paper).unwrap();
    let (pages, state) = Interpreter::new(paper).run_to_completion(&bytes);

    assert_eq!(pages.len(), 1);

    let word_width = text_size("WORLD", &style).width;
    assert_eq!(state.cursor.x, word_width);
    assert_eq!(state.cursor.y, 60);
}

#[test]
fn a_page_break_resets_the_cursor_to_the_printable_origin_on_both_sides() {
    let style = Style::default();
    let paper = Paper::new(4.0, 4.0, Margins::all(0), 24).unwrap();

    let doc = LaidOutDocument {
        pages: vec![
            Page { items: vec![text_item(0, 0, "A", style)] },
            Page { items: vec![text_item(0, 0, "B", style)] },
        ],
    };

    let bytes = escp_render::render(&doc, paper).unwrap();
    let (pages, state) = Interpreter::new(paper).run_to_completion(&bytes);

    assert_eq!(pages.len(), 2);
    let origin = paper.printable_area();
    assert_eq!(state.cursor.y, origin.y);
}
