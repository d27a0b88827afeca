use crate::barcode::{Barcode, Dithering};
use crate::border::BorderStyle;
use crate::dimension::{ContainerProps, CrossAlign, Justify, LineDirection, LineLength, StackDirection};
use crate::dynamic::{Condition, SwitchCase};
use crate::table::{GridColumn, GridRow};
use escp_style::{Align, StyleOverride};
use escp_types::Dots;
use serde_json::Value;

/// The declarative, tree-shaped layout description the engine consumes.
/// Built up-front by an external builder/JSX facade and never mutated by
/// the engine itself.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// A leaf rendering a single line of glyphs. Wrapping is explicit via
    /// the container (the builder's text-wrap collaborator invokes
    /// `wrapLine()` at its own boundary).
    Text {
        content: String,
        style: StyleOverride,
        align: Option<Align>,
    },
    /// Repeats a character to fill a measured or fixed extent.
    Line {
        ch: char,
        length: LineLength,
        direction: LineDirection,
    },
    Stack {
        direction: StackDirection,
        children: Vec<LayoutNode>,
        align: CrossAlign,
        props: ContainerProps,
    },
    Flex {
        children: Vec<LayoutNode>,
        row_gap: Dots,
        justify: Justify,
        align_items: CrossAlign,
        props: ContainerProps,
    },
    Spacer {
        size: Option<Dots>,
        flex: Option<f32>,
    },
    Grid {
        rows: Vec<GridRow>,
        columns: Vec<GridColumn>,
    },
    /// A `Grid` framed with box-drawing borders: an outer frame, a rule
    /// under an optional header row, and a rule after every data row.
    Table {
        columns: Vec<GridColumn>,
        header: Option<Vec<LayoutNode>>,
        rows: Vec<GridRow>,
        border: BorderStyle,
    },
    Image {
        pixels: Vec<u8>,
        width: Dots,
        height: Dots,
        dithering: Dithering,
    },
    Barcode(Barcode),

    // --- Dynamic variants, resolved against data before layout. ---
    Template {
        template: String,
        data: Option<Value>,
    },
    If {
        condition: Condition,
        then: Box<LayoutNode>,
        or_else: Option<Box<LayoutNode>>,
    },
    Switch {
        path: String,
        cases: Vec<SwitchCase>,
        default: Option<Box<LayoutNode>>,
    },
    For {
        items: String,
        binding: String,
        render: Box<LayoutNode>,
        separator: Option<Box<LayoutNode>>,
    },
}

impl LayoutNode {
    /// True for `Template`/`If`/`Switch`/`For` — nodes that must be
    /// resolved against a data context by the layout tree walker before
    /// reaching measurement.
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            LayoutNode::Template { .. }
                | LayoutNode::If { .. }
                | LayoutNode::Switch { .. }
                | LayoutNode::For { .. }
        )
    }
}
