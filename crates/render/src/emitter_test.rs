//! The render-emitter property table's byte-level scenarios: S1-S3 and S6.
//! S4/S5 (pagination) are covered in `escp-layout`'s `pagination_test`.

use escp_layout::{LaidContent, LaidOutDocument, Page, PositionedItem};
use escp_style::{Align, Cpi, Style};
use escp_types::{Margins, Paper};

use crate::emit::render;

fn text_item(x: i32, y: i32, content: &str, style: Style) -> PositionedItem {
    PositionedItem { x, y, content: LaidContent::Text { content: content.into(), style, align: Align::Left } }
}

fn zero_margin_paper() -> Paper {
    Paper::new(8.5, 11.0, Margins::all(0), 66).unwrap()
}

#[test]
fn s1_contiguous_start_justified_text_needs_no_position_commands() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let doc = LaidOutDocument {
        pages: vec![Page {
            items: vec![
                text_item(0, 0, "A", style),
                text_item(36, 0, "B", style),
                text_item(72, 0, "C", style),
            ],
        }],
    };
    let bytes = render(&doc, zero_margin_paper()).unwrap();
    assert_eq!(bytes, vec![0x1B, b'@', b'A', b'B', b'C']);
}

#[test]
fn s2_justify_end_emits_an_absolute_esc_dollar_positioning_command() {
    let style = Style { cpi: Cpi::Ten, ..Style::default() };
    let doc = LaidOutDocument {
        pages: vec![Page {
            items: vec![
                text_item(2952, 0, "A", style),
                text_item(2988, 0, "B", style),
                text_item(3024, 0, "C", style),
            ],
        }],
    };
    let bytes = render(&doc, zero_margin_paper()).unwrap();
    // round(2952/6) = 492 = 0x01EC, low byte then high byte.
    assert_eq!(&bytes[2..6], &[0x1B, b'$', 0xEC, 0x01]);
    assert_eq!(&bytes[6..9], b"ABC");
}

#[test]
fn s3_a_vertical_advance_past_255_units_splits_into_two_esc_j_commands() {
    let style = Style::default();
    let doc = LaidOutDocument {
        pages: vec![Page { items: vec![text_item(100, 540, "X", style)] }],
    };
    let bytes = render(&doc, zero_margin_paper()).unwrap();
    let j_commands: Vec<&[u8]> = bytes.windows(3).filter(|w| w[0] == 0x1B && w[1] == b'J').map(|w| &w[..]).collect();
    assert_eq!(j_commands, vec![&[0x1B, b'J', 255][..], &[0x1B, b'J', 15][..]]);
}

#[test]
fn s6_double_width_text_brackets_itself_in_esc_w_and_reverts_before_the_next_run() {
    let doubled = Style { cpi: Cpi::Ten, double_width: true, ..Style::default() };
    let plain = Style { cpi: Cpi::Ten, ..Style::default() };
    let doc = LaidOutDocument {
        pages: vec![Page {
            items: vec![
                text_item(0, 0, "HI", doubled),
                text_item(144, 0, "X", plain),
            ],
        }],
    };
    let bytes = render(&doc, zero_margin_paper()).unwrap();
    assert_eq!(
        bytes,
        vec![0x1B, b'@', 0x1B, b'W', 1, b'H', b'I', 0x1B, b'W', 0, b'X']
    );
}
