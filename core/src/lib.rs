//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod camera;
pub mod common;
pub mod error;
pub mod image_io;
