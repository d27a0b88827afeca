//! Byte encodings for the text-style toggle commands: weight, slant,
//! underline, width/height multipliers, pitch and font selection.
//!
//! Every function here is total — given a value, it always returns bytes.
//! None of them inspect or mutate printer state; that is the caller's job.

use escp_style::{Cpi, Quality, Typeface};

pub const ESC: u8 = 0x1B;

pub fn initialize() -> Vec<u8> {
    vec![ESC, b'@']
}

pub fn set_bold(on: bool) -> Vec<u8> {
    vec![ESC, if on { b'E' } else { b'F' }]
}

pub fn set_italic(on: bool) -> Vec<u8> {
    vec![ESC, if on { b'4' } else { b'5' }]
}

pub fn set_double_strike(on: bool) -> Vec<u8> {
    vec![ESC, if on { b'G' } else { b'H' }]
}

/// `ESC - n`: n=1 enables underline, n=0 disables it.
pub fn set_underline(on: bool) -> Vec<u8> {
    vec![ESC, b'-', on as u8]
}

/// `SI` / `DC2`: condensed printing toggle. Unlike the other style toggles
/// this is a single control byte, not an ESC-prefixed sequence.
pub fn set_condensed(on: bool) -> Vec<u8> {
    vec![if on { 0x0F } else { 0x12 }]
}

/// `ESC W n`: persistent double-width toggle, distinct from the one-shot
/// `ESC SO` form used for a single line.
pub fn set_double_width(on: bool) -> Vec<u8> {
    vec![ESC, b'W', on as u8]
}

/// `ESC SO` (shift-out): double-width for the remainder of the current
/// line only, cleared automatically at the next line feed.
pub fn double_width_one_line() -> Vec<u8> {
    vec![0x0E]
}

/// `ESC w n`: double-height toggle.
pub fn set_double_height(on: bool) -> Vec<u8> {
    vec![ESC, b'w', on as u8]
}

/// Selects a fixed character pitch via the command dedicated to that pitch:
/// `ESC P` (10 cpi / pica), `ESC M` (12 cpi / elite), `ESC g` (15 cpi /
/// micron). There is no single "set cpi n" opcode on this printer.
pub fn set_cpi(cpi: Cpi) -> Vec<u8> {
    match cpi {
        Cpi::Ten => vec![ESC, b'P'],
        Cpi::Twelve => vec![ESC, b'M'],
        Cpi::Fifteen => vec![ESC, b'g'],
    }
}

/// `ESC p n`: proportional spacing toggle. Overrides the fixed-pitch
/// commands while active.
pub fn set_proportional(on: bool) -> Vec<u8> {
    vec![ESC, b'p', on as u8]
}

/// `ESC k n`: selects one of the built-in bitmap typefaces.
pub fn set_typeface(face: Typeface) -> Vec<u8> {
    vec![ESC, b'k', face.selector()]
}

/// `ESC x n`: draft vs. letter-quality print mode.
pub fn set_quality(quality: Quality) -> Vec<u8> {
    vec![ESC, b'x', quality.selector()]
}
