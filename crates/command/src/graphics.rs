//! Bit-image, barcode, character-table and unit-select commands.

use crate::bytes::to_low_high;
use crate::error::CommandError;
use crate::text_style::ESC;
use escp_idf::{Barcode, BarcodeType, HriFont, HriPosition};

const GS: u8 = 0x1D;

/// `ESC * m nL nH d1...dk`: emits one column-major bit-image stripe.
/// `width` is the number of columns (each a vertical slice of up to 24
/// dots depending on `mode`); `data` must already be packed the way the
/// selected mode expects. The builder never validates dot content, only
/// that the declared width matches the data it is given.
pub fn bit_image(mode: u8, width: u16, data: &[u8]) -> Result<Vec<u8>, CommandError> {
    let bytes_per_column = (mode_vertical_dots(mode) + 7) / 8;
    let expected = width as usize * bytes_per_column as usize;
    if data.len() != expected {
        return Err(CommandError::BitImageDataMismatch(
            data.len(),
            mode_vertical_dots(mode),
        ));
    }
    let (lo, hi) = to_low_high(width);
    let mut out = vec![ESC, b'*', mode, lo, hi];
    out.extend_from_slice(data);
    Ok(out)
}

fn mode_vertical_dots(mode: u8) -> u16 {
    match mode {
        0 | 1 => 8,
        32 | 33 => 24,
        _ => 8,
    }
}

/// `ESC R n`: selects one of the printer's built-in international
/// character-substitution tables.
pub fn international_charset(n: u8) -> Vec<u8> {
    vec![ESC, b'R', n]
}

/// `ESC ( U 01 00 n`: sets the base measurement unit, in 1/1440-inch
/// steps, used by the positioning commands.
pub fn unit_select(n: u8) -> Vec<u8> {
    vec![ESC, b'(', b'U', 0x01, 0x00, n]
}

fn function_a_code(kind: BarcodeType) -> Option<u8> {
    match kind {
        BarcodeType::UpcA => Some(0),
        BarcodeType::UpcE => Some(1),
        BarcodeType::Ean13 => Some(2),
        BarcodeType::Ean8 => Some(3),
        BarcodeType::Code39 => Some(4),
        BarcodeType::Itf => Some(5),
        BarcodeType::Codabar => Some(6),
        BarcodeType::Code128 => None,
    }
}

fn hri_position_code(pos: HriPosition) -> u8 {
    match pos {
        HriPosition::None => 0,
        HriPosition::Above => 1,
        HriPosition::Below => 2,
        HriPosition::Both => 3,
    }
}

fn hri_font_code(font: HriFont) -> u8 {
    match font {
        HriFont::A => 0,
        HriFont::B => 1,
    }
}

/// Frames a complete barcode as the sequence of `GS`-prefixed commands
/// that configure module width, height and HRI text before the data
/// command itself. Code 128 carries a leading length byte since its
/// symbology allows arbitrary bytes; the others are NUL-terminated.
pub fn barcode(b: &Barcode) -> Result<Vec<u8>, CommandError> {
    if b.data.is_empty() {
        return Err(CommandError::EmptyBarcodeData);
    }
    if b.data.len() > 255 {
        return Err(CommandError::BarcodeDataTooLong(b.data.len()));
    }

    let mut out = Vec::new();
    out.extend_from_slice(&[GS, b'w', b.module_width.clamp(1, 255) as u8]);
    out.extend_from_slice(&[GS, b'h', b.height.clamp(1, 255) as u8]);
    out.extend_from_slice(&[GS, b'H', hri_position_code(b.hri_position)]);
    out.extend_from_slice(&[GS, b'f', hri_font_code(b.hri_font)]);

    out.push(GS);
    out.push(b'k');
    match function_a_code(b.kind) {
        Some(m) => {
            out.push(m);
            out.extend_from_slice(b.data.as_bytes());
            out.push(0x00);
        }
        None => {
            out.push(73);
            out.push(b.data.len() as u8);
            out.extend_from_slice(b.data.as_bytes());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_select_frames_base_unit_divisor() {
        assert_eq!(unit_select(4), vec![ESC, b'(', b'U', 0x01, 0x00, 4]);
    }

    #[test]
    fn code39_barcode_is_nul_terminated() {
        let b = Barcode {
            data: "HELLO".into(),
            kind: BarcodeType::Code39,
            module_width: 3,
            height: 100,
            hri_position: HriPosition::Below,
            hri_font: HriFont::A,
        };
        let bytes = barcode(&b).unwrap();
        assert!(bytes.ends_with(&[b'O', 0x00]));
        assert_eq!(&bytes[0..3], &[GS, b'w', 3]);
    }

    #[test]
    fn code128_barcode_carries_a_length_byte_not_nul() {
        let b = Barcode {
            data: "AB12".into(),
            kind: BarcodeType::Code128,
            module_width: 2,
            height: 80,
            hri_position: HriPosition::None,
            hri_font: HriFont::A,
        };
        let bytes = barcode(&b).unwrap();
        assert!(bytes.ends_with(b"AB12"));
        assert!(!bytes.contains(&0x00) || bytes[bytes.len() - 1] != 0);
    }

    #[test]
    fn empty_barcode_data_is_rejected() {
        let b = Barcode {
            data: String::new(),
            kind: BarcodeType::Ean13,
            module_width: 2,
            height: 50,
            hri_position: HriPosition::None,
            hri_font: HriFont::A,
        };
        assert_eq!(barcode(&b), Err(CommandError::EmptyBarcodeData));
    }
}
