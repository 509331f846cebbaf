//! JSON report renderer.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use super::{ERROR_PLACEHOLDER, Renderer};
use crate::stats::{AggregateResult, SummaryRecord};

#[derive(Serialize)]
struct Report<'a> {
    releases: Vec<SummaryRecord<'a>>,
    total_downloads: u64,
}

/// Holds the most recently rendered JSON document.
#[derive(Debug, Default)]
pub struct JsonReport {
    document: String,
}

impl JsonReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered document, empty until something has been rendered.
    pub fn output(&self) -> &str {
        &self.document
    }
}

impl Renderer for JsonReport {
    fn render(&mut self, result: &AggregateResult) -> Result<()> {
        let report = Report {
            releases: result.summaries.iter().map(SummaryRecord::from).collect(),
            total_downloads: result.total_downloads,
        };
        self.document =
            serde_json::to_string_pretty(&report).context("Failed to serialize statistics")?;
        Ok(())
    }

    fn render_error(&mut self) -> Result<()> {
        self.document = serde_json::to_string_pretty(&json!({ "error": ERROR_PLACEHOLDER }))
            .context("Failed to serialize error report")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Release, ReleaseAsset};
    use crate::stats::summarize;
    use serde_json::Value;

    #[test]
    fn test_new_report_is_empty() {
        assert_eq!(JsonReport::new().output(), "");
    }

    #[test]
    fn test_render_report() {
        let result = summarize(vec![
            Release {
                tag: "v1.0".into(),
                name: Some("First".into()),
                assets: vec![ReleaseAsset {
                    name: "a.zip".into(),
                    download_count: 42,
                }],
                ..Default::default()
            },
            Release {
                tag: "v2.0".into(),
                ..Default::default()
            },
        ])
        .unwrap();

        let mut report = JsonReport::new();
        report.render(&result).unwrap();
        let value: Value = serde_json::from_str(report.output()).unwrap();

        assert_eq!(value["total_downloads"], 42);
        assert_eq!(value["releases"][0]["name"], "First");
        assert_eq!(value["releases"][0]["tag"], "v1.0");
        assert_eq!(value["releases"][0]["download_count"], 42);
        assert_eq!(value["releases"][1]["name"], "v2.0");
        assert_eq!(value["releases"][1]["published_at"], Value::Null);
    }

    #[test]
    fn test_render_error_replaces_report() {
        let mut report = JsonReport::new();
        report.render(&AggregateResult::default()).unwrap();
        report.render_error().unwrap();

        let value: Value = serde_json::from_str(report.output()).unwrap();
        assert_eq!(value, json!({ "error": "Error loading statistics." }));
    }
}
