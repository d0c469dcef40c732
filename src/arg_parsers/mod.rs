//! Parsers for the values of specific command-line options

mod color;
pub use color::*;
mod transparency;
pub use transparency::*;
