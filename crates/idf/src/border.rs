/// The three border rendering styles a table or framed box can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Ascii,
}

/// The eleven glyphs a border/table renderer needs: four corners, the two
/// straight runs, and the four T-junctions plus a cross, for wherever a
/// column separator meets a horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub t_down: char,
    pub t_up: char,
    pub t_right: char,
    pub t_left: char,
    pub cross: char,
}

impl BorderGlyphs {
    /// Looks up the glyph set for a style. `Single`/`Double` use the CP437
    /// box-drawing block; `Ascii` falls back to `+`/`-`/`|` for character
    /// tables or output sinks that don't carry box-drawing glyphs.
    pub fn for_style(style: BorderStyle) -> Self {
        match style {
            BorderStyle::Single => Self {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                t_down: '┬',
                t_up: '┴',
                t_right: '├',
                t_left: '┤',
                cross: '┼',
            },
            BorderStyle::Double => Self {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                t_down: '╦',
                t_up: '╩',
                t_right: '╠',
                t_left: '╣',
                cross: '╬',
            },
            BorderStyle::Ascii => Self {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                t_down: '+',
                t_up: '+',
                t_right: '+',
                t_left: '+',
                cross: '+',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_style_uses_only_plain_ascii_glyphs() {
        let glyphs = BorderGlyphs::for_style(BorderStyle::Ascii);
        assert_eq!(glyphs.cross, '+');
        assert_eq!(glyphs.horizontal, '-');
        assert_eq!(glyphs.vertical, '|');
    }

    #[test]
    fn single_and_double_styles_use_distinct_glyph_sets() {
        let single = BorderGlyphs::for_style(BorderStyle::Single);
        let double = BorderGlyphs::for_style(BorderStyle::Double);
        assert_ne!(single.cross, double.cross);
        assert_ne!(single.horizontal, double.horizontal);
    }
}
