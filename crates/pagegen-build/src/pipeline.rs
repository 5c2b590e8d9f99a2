//! Build pipeline.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use pagegen_render::{minify_css, Document, DEFAULT_STYLES};

use crate::report::report_document;

/// Site page written by every build.
pub const INDEX_FILE: &str = "index.html";

/// Build report page.
pub const REPORT_FILE: &str = "build-report.html";

/// JSON description of the build.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Configuration for a build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Site title
    pub title: String,

    /// Lines rendered as paragraphs on the site page
    pub content: Vec<String>,

    /// Minify the embedded stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            title: "Jenkins Assignment Demo".to_string(),
            content: vec![
                "Welcome to the Jenkins Assignment demo project!".to_string(),
                "This is a simple Rust application that generates static HTML.".to_string(),
                "It demonstrates how to build a project and generate reports for Jenkins."
                    .to_string(),
                "The application creates HTML files that can be published as Jenkins artifacts."
                    .to_string(),
            ],
            minify: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Whether every artifact was written
    pub success: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Artifact file names, in write order
    pub files: Vec<String>,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Contents of `manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub title: String,
    /// RFC 3339 build time
    pub generated_at: String,
    pub duration_ms: u64,
    pub files: Vec<String>,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    ManifestError(String),
}

/// The site page for `config`, with the default stylesheet.
pub fn index_document(config: &BuildConfig) -> Document {
    let mut doc = Document::new(&config.title);
    for line in &config.content {
        doc.append(line);
    }
    doc
}

/// Page stylesheet, minified when `minify` is set.
///
/// Falls back to the unminified rules if minification fails.
pub fn stylesheet(minify: bool) -> String {
    if !minify {
        return DEFAULT_STYLES.to_string();
    }
    minify_css(DEFAULT_STYLES).unwrap_or_else(|e| {
        tracing::warn!("Failed to minify styles: {}", e);
        DEFAULT_STYLES.to_string()
    })
}

/// Writes the site page, build report and manifest.
pub struct BuildPipeline {
    config: BuildConfig,
}

impl BuildPipeline {
    /// Create a new build pipeline.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the build.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let generated_at = Utc::now();

        fs::create_dir_all(&self.config.output_dir).map_err(|e| BuildError::WriteError {
            path: self.config.output_dir.display().to_string(),
            source: e,
        })?;

        let files: Vec<String> = [INDEX_FILE, REPORT_FILE, MANIFEST_FILE]
            .iter()
            .map(|f| f.to_string())
            .collect();
        let styles = stylesheet(self.config.minify);

        let index_html = index_document(&self.config)
            .with_styles(styles.clone())
            .render_at(generated_at);
        self.write(INDEX_FILE, &index_html)?;

        let page_size = index_html.chars().count();
        let report_html = report_document(&self.config.title, page_size, &files, generated_at)
            .with_styles(styles)
            .render_at(generated_at);
        self.write(REPORT_FILE, &report_html)?;

        let manifest = Manifest {
            name: "pagegen".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: self.config.title.clone(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            duration_ms: start.elapsed().as_millis() as u64,
            files: files.clone(),
        };
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| BuildError::ManifestError(e.to_string()))?;
        self.write(MANIFEST_FILE, &json)?;

        let duration = start.elapsed();
        tracing::debug!(
            "Wrote {} artifacts to {}",
            files.len(),
            self.config.output_dir.display()
        );

        Ok(BuildResult {
            success: true,
            duration_ms: duration.as_millis() as u64,
            files,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), BuildError> {
        let path = self.config.output_dir.join(name);
        fs::write(&path, contents).map_err(|e| BuildError::WriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
