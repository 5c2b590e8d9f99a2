//! Build report page.

use chrono::{DateTime, SecondsFormat, Utc};
use pagegen_render::Document;

/// Heading of the build report page.
pub const REPORT_TITLE: &str = "Build Report";

/// Build the report document describing a build.
pub fn report_document(
    site_title: &str,
    page_size: usize,
    files: &[String],
    generated_at: DateTime<Utc>,
) -> Document {
    let mut doc = Document::new(REPORT_TITLE);
    doc.append(format!("Site: {}", site_title))
        .append(format!("Generator: pagegen {}", env!("CARGO_PKG_VERSION")))
        .append(format!(
            "Build started: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ))
        .append(format!("Index page size: {} characters", page_size))
        .append(format!("Artifacts: {}", files.join(", ")));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn report_lists_build_facts() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let files = vec!["index.html".to_string(), "manifest.json".to_string()];

        let html = report_document("Demo Site", 1234, &files, at).render_at(at);

        assert!(html.contains("<h1>Build Report</h1>"));
        assert!(html.contains("<p>Site: Demo Site</p>"));
        assert!(html.contains("<p>Index page size: 1234 characters</p>"));
        assert!(html.contains("<p>Artifacts: index.html, manifest.json</p>"));
        assert!(html.contains("Build started: 2026-01-02T03:04:05.000Z"));
    }
}
