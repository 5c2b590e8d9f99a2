//! HTML rendering for pagegen.
//!
//! Turns a title and an ordered list of content lines into a complete,
//! self-styled HTML page stamped with its generation time.

pub mod document;
pub mod styles;

pub use document::{Document, SUCCESS_MARKER};
pub use styles::{minify_css, DEFAULT_STYLES};
