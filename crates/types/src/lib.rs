pub mod geometry;
pub mod length;
pub mod paper;

pub use geometry::{BoxConstraints, Rect, Size};
pub use length::{columns_to_dots, dots_to_180ths, dots_to_60ths, inches_to_dots, mm_to_dots, points_to_dots, Dots};
pub use paper::{Margins, Paper, PaperConfigError};
