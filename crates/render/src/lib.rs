//! Turns a paginated `LaidOutDocument` into an ESC/P2 byte stream: sorts
//! each page's items into reading order, diffs style/position against a
//! `PrinterState`, and emits the minimum command sequence that reproduces
//! them on the reference printer.

pub mod emit;
pub mod error;

pub use emit::render;
pub use error::RenderError;

#[cfg(test)]
mod emitter_test;
