//! HTML document builder.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::styles::DEFAULT_STYLES;

/// Marker rendered at the bottom of every page once generation completes.
pub const SUCCESS_MARKER: &str = "✅ Build completed successfully!";

/// A single HTML page: a title plus ordered lines of content.
///
/// Lines are inserted verbatim, so callers are responsible for any escaping.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    lines: Vec<String>,
    styles: String,
}

impl Document {
    /// Create an empty document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            styles: DEFAULT_STYLES.to_string(),
        }
    }

    /// Replace the embedded stylesheet (e.g. with a minified copy).
    pub fn with_styles(mut self, styles: impl Into<String>) -> Self {
        self.styles = styles.into();
        self
    }

    /// Append a line of content. Returns `self` so calls can be chained.
    pub fn append(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content lines in append order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the page stamped with the current time.
    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }

    /// Render the page stamped with `generated_at`.
    pub fn render_at(&self, generated_at: DateTime<Utc>) -> String {
        let paragraphs = self
            .lines
            .iter()
            .map(|line| format!("<p>{}</p>", line))
            .collect::<Vec<_>>()
            .join("\n            ");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{styles}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <div class="timestamp">Generated on: {timestamp}</div>
        <div class="content">
            {paragraphs}
        </div>
        <div class="success">{marker}</div>
    </div>
</body>
</html>"#,
            title = self.title,
            styles = self.styles.trim_end(),
            timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            paragraphs = paragraphs,
            marker = SUCCESS_MARKER,
        )
    }
}
