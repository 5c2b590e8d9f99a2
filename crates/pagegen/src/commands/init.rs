//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'pagegen build' to generate the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# pagegen configuration

[site]
# Page title, shown in the browser tab and as the heading
title = "Jenkins Assignment Demo"

# Output directory for built pages
output = "dist"

# One paragraph per line, in order
content = [
    "Welcome to the Jenkins Assignment demo project!",
    "This is a simple Rust application that generates static HTML.",
    "It demonstrates how to build a project and generate reports for Jenkins.",
    "The application creates HTML files that can be published as Jenkins artifacts.",
]

[build]
# Minify the embedded stylesheet
minify = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, ConfigFile};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_built_in_defaults() {
        let parsed: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        let defaults = ConfigFile::default();

        assert_eq!(parsed.site.title, defaults.site.title);
        assert_eq!(parsed.site.output, defaults.site.output);
        assert_eq!(parsed.site.content, defaults.site.content);
        assert_eq!(parsed.build.minify, defaults.build.minify);
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pagegen.toml");
        fs::write(&path, "[site]\ntitle = \"Mine\"\n").unwrap();

        run(&path, false).unwrap();
        assert_eq!(load_config(&path).unwrap().site.title, "Mine");

        run(&path, true).unwrap();
        assert_eq!(load_config(&path).unwrap().site.title, "Jenkins Assignment Demo");
    }
}
