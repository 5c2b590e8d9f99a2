//! Configuration file (pagegen.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pagegen_build::BuildConfig;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Lines rendered as paragraphs on the site page
    #[serde(default = "default_content")]
    pub content: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
            content: default_content(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct BuildSettings {
    #[serde(default)]
    pub minify: bool,
}

fn default_title() -> String {
    BuildConfig::default().title
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_content() -> Vec<String> {
    BuildConfig::default().content
}

impl ConfigFile {
    /// Pipeline configuration, with command-line overrides applied.
    pub fn build_config(&self, output: Option<PathBuf>, minify: bool) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            title: self.site.title.clone(),
            content: self.site.content.clone(),
            minify: minify || self.build.minify,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("pagegen.toml")).unwrap();

        assert_eq!(config.site.title, "Jenkins Assignment Demo");
        assert_eq!(config.site.output, "dist");
        assert_eq!(config.site.content.len(), 4);
        assert!(!config.build.minify);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pagegen.toml");
        fs::write(&path, "[site]\ntitle = \"Custom\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.title, "Custom");
        assert_eq!(config.site.output, "dist");
        assert_eq!(config.site.content, BuildConfig::default().content);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pagegen.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn flags_override_file_values() {
        let config: ConfigFile = toml::from_str(
            "[site]\noutput = \"public\"\ncontent = [\"only line\"]\n[build]\nminify = false\n",
        )
        .unwrap();

        let from_file = config.build_config(None, false);
        assert_eq!(from_file.output_dir, PathBuf::from("public"));
        assert_eq!(from_file.content, vec!["only line".to_string()]);
        assert!(!from_file.minify);

        let overridden = config.build_config(Some(PathBuf::from("out")), true);
        assert_eq!(overridden.output_dir, PathBuf::from("out"));
        assert!(overridden.minify);
    }
}
