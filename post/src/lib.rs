//! Post Processing

#[macro_use]
extern crate log;

mod depth;

// Re-export.
pub use depth::*;
