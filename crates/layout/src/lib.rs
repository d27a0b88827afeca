//! Measures and positions an IDF tree.
//!
//! `solve::layout_node` measures a single node and its descendants against
//! a width (height is always unbounded at this stage — pagination, not
//! measurement, decides where a node lands on the page). `pagination::paginate`
//! then walks the resulting `LaidNode` tree and splits it into `Page`s.

pub mod dimension;
pub mod error;
pub mod flex;
pub mod grid;
pub mod measure;
pub mod output;
pub mod pagination;
pub mod solve;
pub mod stack;
pub mod table;

pub use error::LayoutError;
pub use output::{LaidContent, LaidNode, LaidOutDocument, Page, PositionedItem};
pub use pagination::paginate;
pub use solve::layout_node;
pub use table::layout_table;

#[cfg(test)]
mod flex_test;
