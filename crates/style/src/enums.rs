//! Enumerations for style properties, grouped alongside dimensions the way
//! a CSS-like style crate would (`FlexDirection`, `FontWeight`, etc.),
//! specialised to the ESC/P2 text-style property set.

/// The three bitmap typefaces the reference printer carries built-in tables
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Typeface {
    #[default]
    Roman,
    SansSerif,
    Courier,
}

impl Typeface {
    /// The `ESC k n` selector value.
    pub fn selector(self) -> u8 {
        match self {
            Typeface::Roman => 0,
            Typeface::SansSerif => 1,
            Typeface::Courier => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Quality {
    Draft,
    #[default]
    Lq,
}

impl Quality {
    /// The `ESC x n` selector value.
    pub fn selector(self) -> u8 {
        match self {
            Quality::Draft => 0,
            Quality::Lq => 1,
        }
    }
}

/// Characters per inch. Only the three values the reference printer
/// supports via dedicated ESC/P2 commands are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cpi {
    Ten,
    Twelve,
    Fifteen,
}

impl Default for Cpi {
    fn default() -> Self {
        Cpi::Ten
    }
}

impl Cpi {
    pub fn as_f32(self) -> f32 {
        match self {
            Cpi::Ten => 10.0,
            Cpi::Twelve => 12.0,
            Cpi::Fifteen => 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
