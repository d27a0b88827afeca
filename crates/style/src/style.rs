use crate::enums::{Align, Cpi, Quality, Typeface};
use escp_types::Dots;

/// Fully resolved style for a node, after inheriting from its parent and
/// applying any per-node override. Nothing is non-inheritable in this model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub double_strike: bool,
    pub double_width: bool,
    pub double_height: bool,
    pub condensed: bool,
    pub cpi: Cpi,
    pub typeface: Typeface,
    pub quality: Quality,
    pub inter_char_space: Dots,
    pub align: Align,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            double_strike: false,
            double_width: false,
            double_height: false,
            condensed: false,
            cpi: Cpi::default(),
            typeface: Typeface::default(),
            quality: Quality::default(),
            inter_char_space: 0,
            align: Align::default(),
        }
    }
}

impl Style {
    /// Horizontal Motion Index: the dot advance per character at this
    /// style's CPI, scaled by 0.6 when condensed.
    pub fn hmi(&self) -> Dots {
        hmi_dots(self.cpi, self.condensed)
    }
}

/// `round(360/cpi)`, or `round(360/cpi * 0.6)` when condensed.
/// Kept as a free function so `escp-printer-state` can recompute it without
/// depending on a full `Style` value.
pub fn hmi_dots(cpi: Cpi, condensed: bool) -> Dots {
    let base = 360.0 / cpi.as_f32();
    let scaled = if condensed { base * 0.6 } else { base };
    scaled.round() as Dots
}

/// A sparse set of style overrides applied to one node. Unset (`None`)
/// fields fall back to the inherited parent style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleOverride {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub double_strike: Option<bool>,
    pub double_width: Option<bool>,
    pub double_height: Option<bool>,
    pub condensed: Option<bool>,
    pub cpi: Option<Cpi>,
    pub typeface: Option<Typeface>,
    pub quality: Option<Quality>,
    pub inter_char_space: Option<Dots>,
    pub align: Option<Align>,
}

impl StyleOverride {
    /// Resolves this override against an inherited parent style, producing
    /// the concrete style a node (and, by default, its children) sees.
    pub fn resolve(&self, parent: &Style) -> Style {
        Style {
            bold: self.bold.unwrap_or(parent.bold),
            italic: self.italic.unwrap_or(parent.italic),
            underline: self.underline.unwrap_or(parent.underline),
            double_strike: self.double_strike.unwrap_or(parent.double_strike),
            double_width: self.double_width.unwrap_or(parent.double_width),
            double_height: self.double_height.unwrap_or(parent.double_height),
            condensed: self.condensed.unwrap_or(parent.condensed),
            cpi: self.cpi.unwrap_or(parent.cpi),
            typeface: self.typeface.unwrap_or(parent.typeface),
            quality: self.quality.unwrap_or(parent.quality),
            inter_char_space: self.inter_char_space.unwrap_or(parent.inter_char_space),
            align: self.align.unwrap_or(parent.align),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmi_matches_the_cpi_table() {
        for (cpi, condensed, expected) in [
            (Cpi::Ten, false, 36),
            (Cpi::Twelve, false, 30),
            (Cpi::Fifteen, false, 24),
            (Cpi::Ten, true, 22),
        ] {
            assert_eq!(hmi_dots(cpi, condensed), expected, "{cpi:?} condensed={condensed}");
        }
    }

    #[test]
    fn override_falls_back_to_parent() {
        let parent = Style { bold: true, ..Style::default() };
        let over = StyleOverride { italic: Some(true), ..StyleOverride::default() };
        let resolved = over.resolve(&parent);
        assert!(resolved.bold, "unset fields inherit from parent");
        assert!(resolved.italic, "set fields take the override");
    }
}
