//! Glyph bitmaps for the virtual bitmap renderer.
//!
//! Box-drawing bytes (the CP437 single-line set `escp_idf::border` draws
//! from) get real line-art: every such glyph is one of four half-strokes
//! — up/down/left/right from the cell's centre — combined, so borders and
//! table rules are actually visible pixel-for-pixel in the rasterized
//! output instead of silently vanishing. Ordinary printable ASCII still
//! falls back to a solid block in `Interpreter::draw_glyph`; this table
//! only covers the glyphs a border/table renderer emits.

pub const GLYPH_WIDTH: usize = 8;
pub const GLYPH_HEIGHT: usize = 16;

const VERTICAL: u8 = 0xB3;
const HORIZONTAL: u8 = 0xC4;
const TOP_LEFT: u8 = 0xDA;
const TOP_RIGHT: u8 = 0xBF;
const BOTTOM_LEFT: u8 = 0xC0;
const BOTTOM_RIGHT: u8 = 0xD9;
const T_DOWN: u8 = 0xC2;
const T_UP: u8 = 0xC1;
const T_RIGHT: u8 = 0xC3;
const T_LEFT: u8 = 0xB4;
const CROSS: u8 = 0xC5;

const V_COL: u8 = 0x10; // column 3 of 8, bit-packed MSB-first
const LEFT_HALF: u8 = 0xF0; // columns 0..=3
const RIGHT_HALF: u8 = 0x0F; // columns 4..=7
const H_ROW: usize = 7; // the row the horizontal stroke sits on

fn stroke(up: bool, down: bool, left: bool, right: bool) -> [u8; GLYPH_HEIGHT] {
    let mut rows = [0u8; GLYPH_HEIGHT];
    if up {
        for row in rows.iter_mut().take(H_ROW + 1) {
            *row |= V_COL;
        }
    }
    if down {
        for row in rows.iter_mut().skip(H_ROW) {
            *row |= V_COL;
        }
    }
    if left {
        rows[H_ROW] |= LEFT_HALF;
    }
    if right {
        rows[H_ROW] |= RIGHT_HALF;
    }
    rows
}

/// Returns whether `byte` falls in the CP437 box-drawing range this font
/// table recognizes.
pub fn is_box_drawing(byte: u8) -> bool {
    (VERTICAL..=TOP_LEFT).contains(&byte)
}

/// Looks up the 16-row bitmap for a box-drawing byte. Bytes in range that
/// aren't one of the eleven glyphs a border/table actually uses (CP437
/// carries double-line and mixed-line variants too) fall back to a plain
/// cross — still real line art, not a dropped byte.
pub fn box_drawing_bitmap(byte: u8) -> [u8; GLYPH_HEIGHT] {
    match byte {
        VERTICAL => stroke(true, true, false, false),
        HORIZONTAL => stroke(false, false, true, true),
        TOP_LEFT => stroke(false, true, false, true),
        TOP_RIGHT => stroke(false, true, true, false),
        BOTTOM_LEFT => stroke(true, false, false, true),
        BOTTOM_RIGHT => stroke(true, false, true, false),
        T_DOWN => stroke(false, true, true, true),
        T_UP => stroke(true, false, true, true),
        T_RIGHT => stroke(true, true, false, true),
        T_LEFT => stroke(true, true, true, false),
        CROSS => stroke(true, true, true, true),
        _ => stroke(true, true, true, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_bar_only_lights_the_centre_column() {
        let rows = box_drawing_bitmap(VERTICAL);
        assert!(rows.iter().all(|&r| r == V_COL));
    }

    #[test]
    fn top_left_corner_strokes_down_and_right_only() {
        let rows = box_drawing_bitmap(TOP_LEFT);
        assert_eq!(rows[0], 0, "no stroke above the junction row");
        assert_eq!(rows[H_ROW], V_COL | RIGHT_HALF);
        assert_eq!(rows[GLYPH_HEIGHT - 1], V_COL);
    }

    #[test]
    fn every_byte_in_range_is_recognized() {
        assert!(is_box_drawing(VERTICAL));
        assert!(is_box_drawing(TOP_LEFT));
        assert!(!is_box_drawing(b'A'));
    }
}
