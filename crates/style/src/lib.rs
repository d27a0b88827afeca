pub mod enums;
pub mod style;

pub use enums::{Align, Cpi, Quality, Typeface};
pub use style::{hmi_dots, Style, StyleOverride};
