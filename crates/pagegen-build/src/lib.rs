//! Build pipeline for pagegen.
//!
//! Renders the site page and a build report, then writes them together with
//! a JSON manifest into the output directory.

pub mod pipeline;
pub mod report;

pub use pipeline::{
    index_document, stylesheet, BuildConfig, BuildError, BuildPipeline, BuildResult, Manifest,
    INDEX_FILE, MANIFEST_FILE, REPORT_FILE,
};
pub use report::{report_document, REPORT_TITLE};
