//! Intermediate layout tree (IDF)
//!
//! Defines `LayoutNode`, the tagged-variant tree a caller builds (via an
//! external builder/JSX facade) describing a document's structure and
//! content before layout.

pub mod barcode;
pub mod border;
pub mod dimension;
pub mod dynamic;
pub mod node;
pub mod table;

pub use barcode::{Barcode, BarcodeType, Dithering, HriFont, HriPosition};
pub use border::{BorderGlyphs, BorderStyle};
pub use dimension::{
    BreakHints, ContainerProps, CrossAlign, Dimension, Edges, Justify, LineDirection, LineLength,
    Position, StackDirection,
};
pub use dynamic::{Condition, Operator, SwitchCase};
pub use node::LayoutNode;
pub use table::{GridColumn, GridRow};
