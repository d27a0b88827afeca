use crate::geometry::Rect;
use crate::length::{inches_to_dots, Dots};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaperConfigError {
    #[error("paper configuration '{setting}' produces a non-positive printable area")]
    NonPositivePrintableArea { setting: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: Dots,
    pub bottom: Dots,
    pub left: Dots,
    pub right: Dots,
}

impl Margins {
    pub fn all(value: Dots) -> Self {
        Self { top: value, bottom: value, left: value, right: value }
    }
}

/// Paper configuration for the reference device.
///
/// Default: 1069/72" x 615/72" (~14.847" x 8.542"), margins 90 dots
/// top/bottom, 225 dots left/right, 51 lines per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paper {
    pub width: Dots,
    pub height: Dots,
    pub margins: Margins,
    pub lines_per_page: u32,
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            width: inches_to_dots(1069.0 / 72.0),
            height: inches_to_dots(615.0 / 72.0),
            margins: Margins { top: 90, bottom: 90, left: 225, right: 225 },
            lines_per_page: 51,
        }
    }
}

impl Paper {
    pub fn new(
        width_inches: f32,
        height_inches: f32,
        margins: Margins,
        lines_per_page: u32,
    ) -> Result<Self, PaperConfigError> {
        let paper = Self {
            width: inches_to_dots(width_inches),
            height: inches_to_dots(height_inches),
            margins,
            lines_per_page,
        };
        paper.validate()?;
        Ok(paper)
    }

    fn validate(&self) -> Result<(), PaperConfigError> {
        if self.printable_width() <= 0 {
            return Err(PaperConfigError::NonPositivePrintableArea { setting: "margins.left/right" });
        }
        if self.printable_height() <= 0 {
            return Err(PaperConfigError::NonPositivePrintableArea { setting: "margins.top/bottom" });
        }
        Ok(())
    }

    pub fn printable_width(&self) -> Dots {
        self.width - self.margins.left - self.margins.right
    }

    pub fn printable_height(&self) -> Dots {
        self.height - self.margins.top - self.margins.bottom
    }

    /// The printable region as a `Rect` with origin at the top-left margin.
    pub fn printable_area(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.printable_width().max(0),
            self.printable_height().max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paper_matches_reference_device() {
        let p = Paper::default();
        assert_eq!(p.margins.top, 90);
        assert_eq!(p.margins.left, 225);
        assert_eq!(p.lines_per_page, 51);
    }

    #[test]
    fn rejects_non_positive_printable_area() {
        let err = Paper::new(1.0, 11.0, Margins::all(200), 10).unwrap_err();
        assert!(matches!(err, PaperConfigError::NonPositivePrintableArea { .. }));
    }
}
