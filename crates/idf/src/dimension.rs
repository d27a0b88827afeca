use escp_style::StyleOverride;
use escp_types::Dots;

/// A width/height value as it appears on a `Stack`, `Flex`, or grid column.
/// Also doubles as a margin edge's value, where `Auto` triggers the
/// cross-axis centre/expand behavior instead of sizing from content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// An explicit dot value.
    Fixed(Dots),
    /// `N%` of the nearest container with a definite inner size.
    Percent(f32),
    /// Distributes remaining space among flexible siblings after fixed and
    /// percentage sizes are resolved.
    Fill,
    /// Sized from intrinsic content (measurement), the implicit default.
    Auto,
}

impl Default for Dimension {
    /// A plain zero offset — the default margin edge is "no margin", not
    /// `auto`.
    fn default() -> Self {
        Dimension::Fixed(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis alignment. For a `row` container this is `alignItems`
/// (vertical); for a `column` container this is `align` (horizontal).
/// `Start`/`End` stand for the `top|left` / `bottom|right` pair,
/// whichever applies to the container's axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum CrossAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum Position {
    #[default]
    Static,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDirection {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineLength {
    Fixed(Dots),
    Fill,
}

/// Four-edge box, generic so `margin` can hold `Dimension` (for `auto`)
/// while `padding` keeps the plain resolved-dots form everywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges<T = Dots> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl Edges<Dots> {
    pub fn all(value: Dots) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn x(&self) -> Dots {
        self.left + self.right
    }

    pub fn y(&self) -> Dots {
        self.top + self.bottom
    }
}

/// Pagination hints shared by every container variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakHints {
    pub keep_together: bool,
    pub break_before: bool,
    pub break_after: bool,
}

/// Groups the box-model properties common to `Stack` and `Flex` so their
/// constructors don't each carry a dozen loose fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerProps {
    pub gap: Dots,
    pub padding: Edges,
    /// Each edge may be `auto`: on the cross axis, `auto` on both edges
    /// centres the child and `auto` on one edge pushes it to the opposite
    /// edge, overriding the container's `alignItems`/`align` for that child.
    pub margin: Edges<Dimension>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub position: Position,
    pub pos_x: Option<Dots>,
    pub pos_y: Option<Dots>,
    pub rel_x: Dots,
    pub rel_y: Dots,
    pub style: StyleOverride,
    pub breaks: BreakHints,
}
