//! Extractor for the root `<svg>` element of an SVG document

pub mod document;
mod extract;
pub mod lexer;

pub use document::*;
pub use extract::extract;
