//! Renderers

#[macro_use]
extern crate log;

mod cycles;
mod luxcore;
mod render;
mod scene;

// Re-export.
pub use cycles::*;
pub use luxcore::*;
pub use render::*;
pub use scene::*;
