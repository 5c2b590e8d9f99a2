//! Render the site page.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pagegen_build::{index_document, stylesheet};

use crate::config::ConfigFile;

/// Run the generate command.
pub fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Starting HTML generator...");

    let build_config = config.build_config(None, false);
    let html = index_document(&build_config)
        .with_styles(stylesheet(build_config.minify))
        .render();

    tracing::info!("HTML content generated successfully");
    tracing::info!("Content length: {} characters", html.chars().count());

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_page_to_output_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("page.html");

        run(&ConfigFile::default(), Some(path.clone())).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Jenkins Assignment Demo</h1>"));
        assert!(html.contains(".container { max-width: 800px;"));
    }

    #[test]
    fn honours_minify_setting() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("page.html");
        let mut config = ConfigFile::default();
        config.build.minify = true;

        run(&config, Some(path.clone())).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains(".container{"));
        assert!(!html.contains(".container { max-width: 800px;"));
    }
}
