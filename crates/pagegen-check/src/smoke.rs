//! Smoke checks for the renderer and the build output.
//!
//! Checks that inspect artifacts run the build pipeline themselves against
//! the configured output directory, so no check relies on files left behind
//! by an earlier one.

use std::fs;
use std::path::Path;

use anyhow::Context;
use regex::Regex;

use pagegen_build::{
    BuildConfig, BuildPipeline, INDEX_FILE, MANIFEST_FILE, REPORT_FILE, REPORT_TITLE,
};
use pagegen_render::{Document, SUCCESS_MARKER};

use crate::runner::{assert_true, TestSuite};

/// Build the smoke suite for `config`.
pub fn smoke_suite(config: BuildConfig) -> TestSuite {
    let mut suite = TestSuite::new();

    suite.register("Document renders a complete page", || {
        let mut doc = Document::new("Smoke");
        doc.append("Test content");
        let html = doc.render();

        assert_true(html.starts_with("<!DOCTYPE html>"), "Should contain DOCTYPE")?;
        assert_true(html.contains("Test content"), "Should contain test content")?;
        assert_true(html.contains("<html"), "Should contain html tag")?;
        assert_true(html.contains("</html>"), "Should close html tag")?;
        assert_true(html.contains(SUCCESS_MARKER), "Should contain success marker")?;

        let timestamp = Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z")?;
        assert_true(timestamp.is_match(&html), "Should contain generation timestamp")?;
        Ok(())
    });

    suite.register("Document keeps multiple content lines in order", || {
        let mut doc = Document::new("Smoke");
        doc.append("First item").append("Second item");
        let html = doc.render();

        let first = html.find("<p>First item</p>");
        let second = html.find("<p>Second item</p>");
        assert_true(first.is_some(), "Should contain first item")?;
        assert_true(second.is_some(), "Should contain second item")?;
        assert_true(first < second, "Items should keep append order")?;
        Ok(())
    });

    let cfg = config.clone();
    suite.register("Build writes every artifact", move || {
        let result = BuildPipeline::new(cfg).build()?;

        assert_true(result.success, "Build should succeed")?;
        assert_true(!result.files.is_empty(), "Should return produced files")?;
        for file in [INDEX_FILE, REPORT_FILE, MANIFEST_FILE] {
            assert_true(
                result.output_dir.join(file).exists(),
                &format!("{} should exist", file),
            )?;
        }
        Ok(())
    });

    let cfg = config.clone();
    suite.register("Generated pages are valid HTML", move || {
        let title = cfg.title.clone();
        let result = BuildPipeline::new(cfg).build()?;

        let index = read_artifact(&result.output_dir, INDEX_FILE)?;
        assert_true(
            index.contains("<!DOCTYPE html>"),
            "index.html should be valid HTML",
        )?;
        assert_true(index.contains(&title), "index.html should contain title")?;

        let report = read_artifact(&result.output_dir, REPORT_FILE)?;
        assert_true(
            report.contains("<!DOCTYPE html>"),
            "build-report.html should be valid HTML",
        )?;
        assert_true(
            report.contains(REPORT_TITLE),
            "build-report.html should contain report title",
        )?;
        Ok(())
    });

    suite.register("Manifest lists every artifact", move || {
        let result = BuildPipeline::new(config).build()?;

        let raw = read_artifact(&result.output_dir, MANIFEST_FILE)?;
        let manifest: serde_json::Value =
            serde_json::from_str(&raw).context("manifest.json should be valid JSON")?;
        assert_true(
            manifest_files(&manifest) == result.files,
            "manifest.json should list every artifact",
        )?;
        assert_true(
            manifest["generated_at"].is_string(),
            "manifest.json should record the build time",
        )?;
        Ok(())
    });

    suite
}

/// Read an artifact, failing when it is missing.
fn read_artifact(dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    assert_true(path.exists(), &format!("{} should exist", name))?;
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

fn manifest_files(manifest: &serde_json::Value) -> Vec<String> {
    manifest["files"]
        .as_array()
        .map(|files| {
            files
                .iter()
                .filter_map(|f| f.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
