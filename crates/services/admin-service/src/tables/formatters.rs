//! Display formatters for admin listing cells.

use askama::Template;
use serde::Serialize;

use domain::STATUS_ACTIVE;

/// Longest description shown in a listing cell before truncation
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Named display transformation applied to a raw cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formatter {
    StatusLabel,
    Truncate,
    LogoImage,
}

impl Formatter {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Formatter::StatusLabel => format_status(raw),
            Formatter::Truncate => truncate_description(raw),
            Formatter::LogoImage => format_logo(raw),
        }
    }
}

/// Green label for active, red for anything else.
pub fn format_status(status: &str) -> String {
    if status == STATUS_ACTIVE {
        r#"<span class="label label-success">Active</span>"#.to_string()
    } else {
        r#"<span class="label label-danger">Inactive</span>"#.to_string()
    }
}

/// First 100 characters, with `...` appended when something was cut.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

const NO_LOGO: &str = r#"<span class="text-muted">No Logo</span>"#;

#[derive(Template)]
#[template(
    source = r#"<img src="{{ url }}" style="max-width: 60px; max-height: 60px; border-radius: 4px;" />"#,
    ext = "html"
)]
struct LogoTag<'a> {
    url: &'a str,
}

/// Thumbnail markup, or a muted placeholder when no logo is set.
pub fn format_logo(url: &str) -> String {
    if url.is_empty() {
        return NO_LOGO.to_string();
    }

    LogoTag { url }.render().unwrap_or_else(|e| {
        tracing::warn!("Failed to render logo markup: {}", e);
        NO_LOGO.to_string()
    })
}
