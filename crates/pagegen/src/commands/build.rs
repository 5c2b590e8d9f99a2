//! Build command.

use std::path::PathBuf;

use anyhow::Result;
use pagegen_build::BuildPipeline;

use crate::config::ConfigFile;

/// Run the build command.
pub fn run(config: &ConfigFile, output: Option<PathBuf>, minify: bool) -> Result<()> {
    tracing::info!("Building pages...");

    let result = BuildPipeline::new(config.build_config(output, minify)).build()?;

    tracing::info!(
        "Built {} artifacts in {}ms: {}",
        result.files.len(),
        result.duration_ms,
        result.files.join(", ")
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
