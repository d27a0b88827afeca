//! A second, independent implementation of ESC/P2 byte-stream semantics,
//! used only to rasterize a command stream for test assertions. Nothing
//! in the production pipeline depends on this crate.

pub mod font;
pub mod interpreter;
pub mod page;

pub use interpreter::{render, Interpreter};
pub use page::VirtualPage;

#[cfg(test)]
mod roundtrip_test;
