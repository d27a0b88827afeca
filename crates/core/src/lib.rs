//! # escp-core
//!
//! The integration layer. Nothing in `escp-template`, `escp-layout`,
//! `escp-render`, or `escp-bitmap` knows about the others — this is the one
//! crate that wires data binding, measurement/pagination, and byte
//! emission into a single call, and hands back both the printer-bound byte
//! stream and a preview bitmap produced by an independent second
//! interpreter of those same bytes.

pub mod builder;
pub mod error;
pub mod output;

pub use builder::DocumentBuilder;
pub use error::EscpError;
pub use output::EscpOutput;

use escp_idf::LayoutNode;
use escp_layout::LaidNode;
use escp_style::Style;
use escp_traits::TemplateResolver;
use escp_types::{BoxConstraints, Paper, Rect};
use serde_json::Value;

/// Resolves dynamic nodes in `root` against `data`, measures and
/// paginates the result against `paper`, and emits both the ESC/P2 byte
/// stream and a preview bitmap in one pass.
pub fn render_document(
    root: &LayoutNode,
    data: &Value,
    resolver: &dyn TemplateResolver,
    paper: Paper,
) -> Result<EscpOutput, EscpError> {
    let resolved = escp_template::resolve_tree(root, data, resolver)?;

    let printable = paper.printable_area();
    let constraints = BoxConstraints::with_width(printable.width);
    let (size, breaks, content) = escp_layout::layout_node(&resolved, &Style::default(), constraints)?;
    let root_node = LaidNode { rect: Rect::new(0, 0, size.width, size.height), breaks, content };

    let doc = escp_layout::paginate(&root_node, &paper);
    let bytes = escp_render::render(&doc, paper)?;
    let pages = escp_bitmap::render(&bytes, paper);

    log::info!("rendered {} page(s), {} bytes", pages.len(), bytes.len());
    Ok(EscpOutput { bytes, pages })
}
