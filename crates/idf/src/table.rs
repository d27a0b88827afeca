use crate::dimension::Dimension;
use crate::node::LayoutNode;
use escp_types::Dots;

/// One row of a `Grid`. Rows are always atomic for pagination: a row
/// either appears entirely on one page or begins a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub cells: Vec<LayoutNode>,
    pub height: Option<Dots>,
    pub keep_with_next: bool,
    pub break_before: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridColumn {
    pub width: Dimension,
}
