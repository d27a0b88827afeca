//! Flattens a paginated document into ESC/P2 bytes: sorts each page's
//! items into reading order, merges adjacent text runs, and walks them
//! emitting minimum-delta positioning and state-diffed style commands.

use escp_command::{bytes::to_low_high, graphics, positioning, text_style};
use escp_idf::{Dithering, LineDirection};
use escp_layout::{LaidContent, LaidOutDocument, PositionedItem};
use escp_printer_state::PrinterState;
use escp_style::Style;
use escp_types::{Dots, Paper};

use crate::error::RenderError;

const FORM_FEED: u8 = 0x0C;
const BIT_IMAGE_MODE_24_DOT: u8 = 33;
const STRIPE_HEIGHT: Dots = 24;

pub fn render(doc: &LaidOutDocument, paper: Paper) -> Result<Vec<u8>, RenderError> {
    let mut state = PrinterState::new(paper);
    let mut out = text_style::initialize();

    for (idx, page) in doc.pages.iter().enumerate() {
        if idx > 0 {
            out.push(FORM_FEED);
            state.form_feed();
        }
        log::debug!("rendering page {} with {} items", idx + 1, page.items.len());
        let items = merge_text_runs(page.items.clone());
        for item in &items {
            emit_item(item, &mut state, &mut out)?;
        }
    }
    Ok(out)
}

/// Sorts by `(y, x)` — ties keep the order they arrived in, i.e. DOM
/// order — then concatenates adjacent `Text` items that share a Y, share a
/// style, and have no horizontal gap between them.
fn merge_text_runs(mut items: Vec<PositionedItem>) -> Vec<PositionedItem> {
    items.sort_by_key(|item| (item.y, item.x));

    let mut merged: Vec<PositionedItem> = Vec::with_capacity(items.len());
    for item in items {
        let can_merge = match (merged.last(), &item.content) {
            (Some(last), LaidContent::Text { content: next, style: next_style, align: next_align }) => {
                match &last.content {
                    LaidContent::Text { content, style, align } => {
                        last.y == item.y
                            && style == next_style
                            && align == next_align
                            && (item.x - (last.x + text_width(content, style))).abs() <= 1
                    }
                    _ => false,
                }
            }
            _ => false,
        };

        if can_merge {
            if let (LaidContent::Text { content, .. }, LaidContent::Text { content: next, .. }) =
                (&mut merged.last_mut().unwrap().content, &item.content)
            {
                content.push_str(next);
                continue;
            }
        }
        merged.push(item);
    }
    merged
}

fn text_width(content: &str, style: &Style) -> Dots {
    escp_layout::measure::text_size(content, style).width
}

fn emit_item(item: &PositionedItem, state: &mut PrinterState, out: &mut Vec<u8>) -> Result<(), RenderError> {
    match &item.content {
        LaidContent::Text { content, style, .. } => {
            move_to(item.x, item.y, state, out);
            diff_style(style, state, out);
            out.extend_from_slice(content.as_bytes());
            state.advance_x(text_width(content, style));
        }
        LaidContent::Line { ch, style, direction, length } => {
            diff_style(style, state, out);
            emit_line(item.x, item.y, *ch, *direction, *length, style, state, out);
        }
        LaidContent::Barcode(barcode) => {
            move_to(item.x, item.y, state, out);
            out.extend(graphics::barcode(barcode)?);
            state.advance_x(barcode.module_width * barcode.data.chars().count().max(1) as Dots);
        }
        LaidContent::Image { pixels, width, height, dithering } => {
            emit_image(item.x, item.y, pixels, *width, *height, *dithering, state, out)?;
        }
        LaidContent::Group(_) => {
            log::warn!("a Group reached the render emitter directly; pagination should have flattened it");
        }
    }
    Ok(())
}

fn diff_style(new: &Style, state: &mut PrinterState, out: &mut Vec<u8>) {
    let cur = state.style;
    if new.bold != cur.bold {
        out.extend(text_style::set_bold(new.bold));
    }
    if new.italic != cur.italic {
        out.extend(text_style::set_italic(new.italic));
    }
    if new.double_strike != cur.double_strike {
        out.extend(text_style::set_double_strike(new.double_strike));
    }
    if new.underline != cur.underline {
        out.extend(text_style::set_underline(new.underline));
    }
    if new.condensed != cur.condensed {
        out.extend(text_style::set_condensed(new.condensed));
    }
    if new.double_width != cur.double_width {
        out.extend(text_style::set_double_width(new.double_width));
    }
    if new.double_height != cur.double_height {
        out.extend(text_style::set_double_height(new.double_height));
    }
    if new.cpi != cur.cpi {
        out.extend(text_style::set_cpi(new.cpi));
    }
    if new.typeface != cur.typeface {
        out.extend(text_style::set_typeface(new.typeface));
    }
    if new.quality != cur.quality {
        out.extend(text_style::set_quality(new.quality));
    }
    state.style = *new;
}

/// Moves the cursor to `(x, y)`, emitting only the commands needed to
/// cover the delta. `ESC $` is skipped within a 1-dot tolerance; `ESC $`'s
/// 16-bit unit field is clamped (with a warning) rather than wrapped.
/// The cursor itself is clamped to the printable margins by
/// `PrinterState::move_to`, the one place that owns that invariant — the
/// deltas below are computed against that same clamped target so the
/// emitted bytes and the resulting state agree.
fn move_to(x: Dots, y: Dots, state: &mut PrinterState, out: &mut Vec<u8>) {
    let area = state.paper.printable_area();
    let target_x = x.clamp(area.x, area.right());
    let target_y = y.clamp(area.y, area.bottom());

    if target_y > state.cursor.y {
        out.extend(positioning::advance_vertical(target_y - state.cursor.y));
    } else if target_y < state.cursor.y {
        log::warn!("render item at y={} is above the current cursor y={}; ESC J cannot move backward, skipping", target_y, state.cursor.y);
    }

    if (target_x - state.cursor.x).abs() > 1 {
        let from_margin = (target_x - state.paper.margins.left).max(0);
        let units = escp_types::dots_to_60ths(from_margin);
        let clamped_units = if units > 0xFFFF {
            log::warn!("absolute horizontal position {} dots exceeds ESC $'s 16-bit unit range; clamping to 0xFFFF", target_x);
            0xFFFF
        } else {
            units
        };
        let (lo, hi) = to_low_high(clamped_units as u16);
        out.extend_from_slice(&[text_style::ESC, b'$', lo, hi]);
    }

    state.move_to(target_x, target_y);
}

fn per_char_width(style: &Style) -> Dots {
    style.hmi() * if style.double_width { 2 } else { 1 }
}

fn emit_line(x: Dots, y: Dots, ch: char, direction: LineDirection, length: Dots, style: &Style, state: &mut PrinterState, out: &mut Vec<u8>) {
    match direction {
        LineDirection::Horizontal => {
            move_to(x, y, state, out);
            let per_char = per_char_width(style).max(1);
            let count = (length / per_char).max(1) as usize;
            let content: String = std::iter::repeat(ch).take(count).collect();
            out.extend_from_slice(content.as_bytes());
            state.advance_x(text_width(&content, style));
        }
        LineDirection::Vertical => {
            let step = escp_layout::measure::line_height(style).max(1);
            let mut row = 0;
            let mut buf = [0u8; 4];
            let ch_bytes = ch.encode_utf8(&mut buf).as_bytes();
            while row < length {
                move_to(x, y + row, state, out);
                out.extend_from_slice(ch_bytes);
                state.advance_x(per_char_width(style));
                row += step;
            }
        }
    }
}

/// Packs a dithered pixel buffer into one or more `ESC *` stripes (the
/// print head covers 24 dots vertically per pass), returning to `x` and
/// stepping down by `STRIPE_HEIGHT` between stripes.
fn emit_image(x: Dots, y: Dots, pixels: &[u8], width: Dots, height: Dots, dithering: Dithering, state: &mut PrinterState, out: &mut Vec<u8>) -> Result<(), RenderError> {
    let w = width.max(0) as usize;
    let h = height.max(0) as usize;
    let mut row_start = 0;
    while row_start < h {
        let rows = STRIPE_HEIGHT.min((h - row_start) as Dots) as usize;
        move_to(x, y + row_start as Dots, state, out);
        let data = pack_stripe(pixels, w, h, row_start, rows, dithering);
        out.extend(graphics::bit_image(BIT_IMAGE_MODE_24_DOT, w as u16, &data)?);
        row_start += STRIPE_HEIGHT as usize;
    }
    Ok(())
}

/// A pixel is "on" at an intensity threshold of 128. Ordered and
/// Floyd-Steinberg dithering fall back to the same threshold here — full
/// error-diffusion belongs to a future bitmap-quality pass, not this one.
fn pack_stripe(pixels: &[u8], width: usize, height: usize, row_start: usize, rows: usize, _dithering: Dithering) -> Vec<u8> {
    let bytes_per_col = 3;
    let mut data = vec![0u8; width * bytes_per_col];
    for col in 0..width {
        for r in 0..rows {
            let y = row_start + r;
            if y >= height {
                break;
            }
            let idx = y * width + col;
            let Some(&value) = pixels.get(idx) else { continue };
            if value >= 128 {
                let byte_idx = col * bytes_per_col + r / 8;
                let bit_idx = 7 - (r % 8);
                data[byte_idx] |= 1 << bit_idx;
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use escp_layout::Page;
    use escp_style::Align;

    fn text_item(x: Dots, y: Dots, content: &str) -> PositionedItem {
        PositionedItem { x, y, content: LaidContent::Text { content: content.into(), style: Style::default(), align: Align::Left } }
    }

    #[test]
    fn output_begins_with_initialize() {
        let doc = LaidOutDocument { pages: vec![Page::default()] };
        let bytes = render(&doc, Paper::default()).unwrap();
        assert_eq!(&bytes[0..2], &[0x1B, b'@']);
    }

    #[test]
    fn adjacent_same_style_text_runs_merge() {
        let items = vec![text_item(0, 0, "AB"), text_item(72, 0, "CD")];
        let merged = merge_text_runs(items);
        assert_eq!(merged.len(), 1);
        let LaidContent::Text { content, .. } = &merged[0].content else { panic!() };
        assert_eq!(content, "ABCD");
    }

    #[test]
    fn a_second_page_is_separated_by_a_form_feed() {
        let doc = LaidOutDocument {
            pages: vec![
                Page { items: vec![text_item(0, 0, "hi")] },
                Page { items: vec![text_item(0, 0, "bye")] },
            ],
        };
        let bytes = render(&doc, Paper::default()).unwrap();
        assert!(bytes.contains(&FORM_FEED));
    }

    #[test]
    fn style_change_is_diffed_once_and_not_repeated() {
        let style = Style { bold: true, ..Style::default() };
        let item_a = PositionedItem { x: 0, y: 0, content: LaidContent::Text { content: "A".into(), style, align: Align::Left } };
        let item_b = PositionedItem { x: 1000, y: 0, content: LaidContent::Text { content: "B".into(), style, align: Align::Left } };
        let doc = LaidOutDocument { pages: vec![Page { items: vec![item_a, item_b] }] };
        let bytes = render(&doc, Paper::default()).unwrap();
        let bold_on = bytes.windows(2).filter(|w| *w == [0x1B, b'E']).count();
        assert_eq!(bold_on, 1);
    }
}
