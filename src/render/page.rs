//! In-memory page with a release list container and a total-downloads label.

use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

use super::{ERROR_PLACEHOLDER, Renderer};
use crate::stats::AggregateResult;

const UNPUBLISHED: &str = "unpublished";
const INITIAL_TOTAL: &str = "-";

/// One release line in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub released: String,
    pub downloads: u64,
}

/// A child of the release list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Row(Row),
    Error(String),
}

/// The two rendering targets of the statistics page.
#[derive(Debug, Clone)]
pub struct Page {
    release_list: Vec<Block>,
    total_downloads: Option<String>,
    date_format: String,
}

impl Page {
    pub const DEFAULT_DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Create an empty page. `date_format` is a strftime pattern.
    pub fn new(date_format: &str) -> Result<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error))
            || format_timestamp(DateTime::<Utc>::UNIX_EPOCH, date_format).is_none()
        {
            bail!("Invalid date format: {}", date_format);
        }
        Ok(Self {
            release_list: Vec::new(),
            total_downloads: Some(INITIAL_TOTAL.to_string()),
            date_format: date_format.to_string(),
        })
    }

    /// Drop the total-downloads label target from the page.
    pub fn without_total_label(mut self) -> Self {
        self.total_downloads = None;
        self
    }

    pub fn release_list(&self) -> &[Block] {
        &self.release_list
    }

    /// Current label text, or `None` when the page has no label.
    pub fn total_downloads(&self) -> Option<&str> {
        self.total_downloads.as_deref()
    }

    fn format_date(&self, published_at: Option<DateTime<Utc>>) -> String {
        match published_at {
            Some(t) => {
                format_timestamp(t, &self.date_format).unwrap_or_else(|| t.to_rfc3339())
            }
            None => UNPUBLISHED.to_string(),
        }
    }

    /// Plain text rendering: aligned rows followed by the total.
    pub fn to_text(&self) -> String {
        let title_width = self
            .release_list
            .iter()
            .filter_map(|block| match block {
                Block::Row(row) => Some(row.title.chars().count()),
                Block::Error(_) => None,
            })
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for block in &self.release_list {
            match block {
                Block::Row(row) => out.push_str(&format!(
                    "Version {:<width$}  Released on {}  {} Downloads\n",
                    row.title,
                    row.released,
                    row.downloads,
                    width = title_width
                )),
                Block::Error(message) => {
                    out.push_str(message);
                    out.push('\n');
                }
            }
        }

        if let Some(total) = &self.total_downloads {
            out.push_str(&format!("Total downloads: {}\n", total));
        }
        out
    }

    /// Standalone HTML document holding both targets.
    pub fn to_html(&self) -> String {
        let mut out = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Download statistics</title>\n</head>\n<body>\n",
        );

        if let Some(total) = &self.total_downloads {
            out.push_str(&format!(
                "<p>Total downloads: <span id=\"total-downloads\">{}</span></p>\n",
                escape_html(total)
            ));
        }

        out.push_str("<div id=\"release-list\">\n");
        for block in &self.release_list {
            match block {
                Block::Row(row) => out.push_str(&format!(
                    "  <div class=\"release-row\">\n    <div class=\"release-info\">\n      \
                     <h4>Version {}</h4>\n      <span>Released on {}</span>\n    </div>\n    \
                     <div class=\"download-pill\">{} Downloads</div>\n  </div>\n",
                    escape_html(&row.title),
                    escape_html(&row.released),
                    row.downloads
                )),
                Block::Error(message) => out.push_str(&format!(
                    "  <p class=\"error\">{}</p>\n",
                    escape_html(message)
                )),
            }
        }
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }
}

impl Renderer for Page {
    fn render(&mut self, result: &AggregateResult) -> Result<()> {
        self.release_list.clear();
        for summary in &result.summaries {
            let row = Row {
                title: summary.release.display_name().to_string(),
                released: self.format_date(summary.release.published_at),
                downloads: summary.download_count,
            };
            self.release_list.push(Block::Row(row));
        }

        if let Some(label) = self.total_downloads.as_mut() {
            *label = result.total_downloads.to_string();
        }
        Ok(())
    }

    fn render_error(&mut self) -> Result<()> {
        self.release_list.clear();
        self.release_list
            .push(Block::Error(ERROR_PLACEHOLDER.to_string()));
        Ok(())
    }
}

/// Format `t` with a strftime pattern, or `None` if the pattern cannot be
/// rendered (for example parse-only specifiers such as `%#z`).
fn format_timestamp(t: DateTime<Utc>, pattern: &str) -> Option<String> {
    let mut formatted = String::new();
    write!(formatted, "{}", t.format(pattern)).ok()?;
    Some(formatted)
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
