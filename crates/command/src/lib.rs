//! Pure functions from typed printer operations to ESC/P2 byte sequences.
//!
//! Every function in this crate is total: given valid arguments it always
//! returns bytes and never touches any notion of "current" printer state.
//! Tracking what the state actually is — so that only the deltas get
//! emitted — is the render crate's job, one layer up.

pub mod bytes;
pub mod error;
pub mod graphics;
pub mod positioning;
pub mod text_style;

pub use error::CommandError;
