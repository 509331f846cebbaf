//! Download statistics over a release collection.

mod aggregator;

use anyhow::{Context, Result};
use log::trace;
use serde::Serialize;

use crate::provider::Release;

pub use aggregator::{Outcome, StatsAggregator};

/// A release together with the sum of its asset download counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub release: Release,
    pub download_count: u64,
}

/// Per-release summaries in provider order, plus their total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateResult {
    pub summaries: Vec<ReleaseSummary>,
    pub total_downloads: u64,
}

/// Reduce a release collection to its download statistics.
///
/// `total_downloads` is always the sum of the summaries' `download_count`.
/// Fails without a partial result if a sum does not fit in a `u64`.
pub fn summarize(releases: Vec<Release>) -> Result<AggregateResult> {
    let mut total_downloads: u64 = 0;
    let mut summaries = Vec::with_capacity(releases.len());

    for release in releases {
        let download_count = release
            .assets
            .iter()
            .try_fold(0u64, |sum, asset| sum.checked_add(asset.download_count))
            .with_context(|| {
                format!("Download count of {} overflows", release.display_name())
            })?;
        total_downloads = total_downloads
            .checked_add(download_count)
            .context("Total download count overflows")?;
        trace!(
            "{}: {} download(s), running total {}",
            release.display_name(),
            download_count,
            total_downloads
        );
        summaries.push(ReleaseSummary {
            release,
            download_count,
        });
    }

    Ok(AggregateResult {
        summaries,
        total_downloads,
    })
}

/// Serializable view of a summary, used by the JSON report.
#[derive(Debug, Serialize)]
pub struct SummaryRecord<'a> {
    pub name: &'a str,
    pub tag: &'a str,
    pub published_at: Option<String>,
    pub download_count: u64,
}

impl<'a> From<&'a ReleaseSummary> for SummaryRecord<'a> {
    fn from(summary: &'a ReleaseSummary) -> Self {
        SummaryRecord {
            name: summary.release.display_name(),
            tag: &summary.release.tag,
            published_at: summary.release.published_at.map(|t| t.to_rfc3339()),
            download_count: summary.download_count,
        }
    }
}
