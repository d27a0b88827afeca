//! Sizing for leaf nodes: `Text`, `Line`, `Image`, `Barcode`.

use escp_idf::{Barcode, LineDirection, LineLength};
use escp_style::Style;
use escp_types::{Dots, Size};

use crate::error::LayoutError;

/// A single-line text run's natural size at its resolved style. Each
/// character advances by the style's HMI (doubled under double-width),
/// with `inter_char_space` inserted between characters but not trailing.
pub fn text_size(content: &str, style: &Style) -> Size {
    let count = content.chars().count() as Dots;
    if count == 0 {
        return Size::new(0, line_height(style));
    }
    let per_char = style.hmi() * if style.double_width { 2 } else { 1 };
    let width = per_char * count + style.inter_char_space * (count - 1);
    Size::new(width, line_height(style))
}

pub fn line_height(style: &Style) -> Dots {
    if style.double_height { 120 } else { 60 }
}

pub fn resolve_line_length(length: LineLength, available: Option<Dots>) -> Result<Dots, LayoutError> {
    match length {
        LineLength::Fixed(d) => Ok(d),
        LineLength::Fill => available.ok_or(LayoutError::UnboundedFill),
    }
}

/// A horizontal rule's size: as wide as `length` resolves to, one text
/// line tall. A vertical rule is one character cell wide and as tall as
/// `length` resolves to.
pub fn line_size(length: LineLength, direction: LineDirection, style: &Style, constraints_main: Option<Dots>) -> Result<Size, LayoutError> {
    match direction {
        LineDirection::Horizontal => {
            let width = resolve_line_length(length, constraints_main)?;
            Ok(Size::new(width, line_height(style)))
        }
        LineDirection::Vertical => {
            let height = resolve_line_length(length, constraints_main)?;
            let width = style.hmi() * if style.double_width { 2 } else { 1 };
            Ok(Size::new(width, height))
        }
    }
}

pub fn image_size(width: Dots, height: Dots) -> Size {
    Size::new(width, height)
}

/// A barcode's footprint: module width times symbol length, by the
/// declared height. HRI text height is not modelled separately here.
pub fn barcode_size(barcode: &Barcode) -> Size {
    let modules = barcode.data.chars().count().max(1) as Dots;
    Size::new(barcode.module_width * modules, barcode.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use escp_style::Cpi;

    #[test]
    fn text_width_matches_hmi_times_char_count() {
        let style = Style { cpi: Cpi::Ten, ..Style::default() };
        let size = text_size("HELLO", &style);
        assert_eq!(size.width, 36 * 5);
        assert_eq!(size.height, 60);
    }

    #[test]
    fn double_height_doubles_line_height() {
        let style = Style { double_height: true, ..Style::default() };
        assert_eq!(line_height(&style), 120);
    }
}
