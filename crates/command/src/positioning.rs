//! Horizontal/vertical positioning and line-spacing commands.

use crate::bytes::to_low_high;
use crate::text_style::ESC;
use escp_types::{dots_to_180ths, dots_to_60ths, Dots};

/// `ESC $ nL nH`: moves the print head to an absolute horizontal position,
/// measured in 1/60-inch units from the left margin.
pub fn absolute_horizontal(dots_from_margin: Dots) -> Vec<u8> {
    let units = dots_to_60ths(dots_from_margin).max(0) as u16;
    let (lo, hi) = to_low_high(units);
    vec![ESC, b'$', lo, hi]
}

/// `ESC J n`: advances the paper by `n` 1/180-inch units without a line
/// feed, n in `0..=255`. Larger advances are chunked into multiple
/// commands since the opcode only carries a single byte of distance.
pub fn advance_vertical(dots: Dots) -> Vec<u8> {
    let mut remaining = dots_to_180ths(dots).max(0);
    let mut out = Vec::new();
    while remaining > 0 {
        let chunk = remaining.min(255) as u8;
        out.extend_from_slice(&[ESC, b'J', chunk]);
        remaining -= chunk as i64;
    }
    out
}

/// `ESC 2`: sets line spacing to 1/6 inch (the power-on default).
pub fn line_spacing_one_sixth_inch() -> Vec<u8> {
    vec![ESC, b'2']
}

/// `ESC 0`: sets line spacing to 1/8 inch.
pub fn line_spacing_one_eighth_inch() -> Vec<u8> {
    vec![ESC, b'0']
}

/// `ESC 3 n`: sets line spacing to `n` 1/180-inch units.
pub fn line_spacing_n_180ths(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

/// `ESC + n`: sets line spacing to `n` 1/360-inch units.
pub fn line_spacing_n_360ths(n: u8) -> Vec<u8> {
    vec![ESC, b'+', n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_horizontal_matches_the_492_unit_scenario() {
        // 2952 dots at 360 dpi == 492 sixtieths of an inch.
        assert_eq!(absolute_horizontal(2952), vec![ESC, b'$', 0xEC, 0x01]);
    }

    #[test]
    fn vertical_advance_chunks_past_255() {
        // 600 1/180ths -> 255 + 255 + 90
        let dots = (600.0 / 180.0 * 360.0).round() as Dots;
        let bytes = advance_vertical(dots);
        assert_eq!(
            bytes,
            vec![ESC, b'J', 255, ESC, b'J', 255, ESC, b'J', 90]
        );
    }

    #[test]
    fn zero_advance_emits_nothing() {
        assert_eq!(advance_vertical(0), Vec::<u8>::new());
    }
}
