//! Output types from the layout/pagination pass.

use escp_idf::{Barcode, BreakHints, Dithering, LineDirection};
use escp_style::{Align, Style};
use escp_types::{Dots, Rect};

/// What a laid-out node actually draws, once dynamic nodes have been
/// resolved and dimensions have been settled.
#[derive(Debug, Clone)]
pub enum LaidContent {
    Text { content: String, style: Style, align: Align },
    Line { ch: char, style: Style, direction: LineDirection, length: Dots },
    Group(Vec<LaidNode>),
    Image { pixels: Vec<u8>, width: Dots, height: Dots, dithering: Dithering },
    Barcode(Barcode),
}

/// A node with its box fully resolved: `rect` is relative to the parent
/// node's content origin, not the page.
#[derive(Debug, Clone)]
pub struct LaidNode {
    pub rect: Rect,
    pub breaks: BreakHints,
    pub content: LaidContent,
}

impl LaidNode {
    /// Approximate heap footprint, summing owned string/byte buffers
    /// across the whole subtree.
    pub fn rough_heap_size(&self) -> usize {
        let mut size = std::mem::size_of::<Self>();
        match &self.content {
            LaidContent::Text { content, .. } => size += content.capacity(),
            LaidContent::Image { pixels, .. } => size += pixels.capacity(),
            LaidContent::Barcode(b) => size += b.data.capacity(),
            LaidContent::Group(children) => {
                size += children.capacity() * std::mem::size_of::<LaidNode>();
                for child in children {
                    size += child.rough_heap_size();
                }
            }
            LaidContent::Line { .. } => {}
        }
        size
    }
}

/// A leaf ready for the render crate: absolute position within the
/// page's printable area plus its drawable content.
#[derive(Debug, Clone)]
pub struct PositionedItem {
    pub x: Dots,
    pub y: Dots,
    pub content: LaidContent,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<PositionedItem>,
}

#[derive(Debug, Clone, Default)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn rough_heap_size(&self) -> usize {
        let mut size = std::mem::size_of::<Self>();
        for page in &self.pages {
            size += page.items.capacity() * std::mem::size_of::<PositionedItem>();
        }
        size
    }
}
