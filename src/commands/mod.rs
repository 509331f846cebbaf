use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    provider::{Provider, RepoId},
    render::{JsonReport, OutputFormat, Page},
    runtime::Runtime,
    stats::{Outcome, StatsAggregator},
};

pub mod config;

use config::Config;

/// Repository whose statistics are shown when none is given.
pub const DEFAULT_REPO: &str = "thedevil4k/FTORRENT";

/// Options of the `relstats` command.
#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Repository in "owner/repo" form
    pub repo: String,
    /// API base URL, defaults to the public GitHub API
    pub api_url: Option<String>,
    /// Full release-list URL, overrides `repo` and `api_url`
    pub endpoint: Option<String>,
    pub format: OutputFormat,
    /// Destination file, stdout when absent
    pub output: Option<PathBuf>,
    /// strftime pattern for release dates
    pub date_format: String,
    /// Whether the page carries a total-downloads label
    pub show_total: bool,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            api_url: None,
            endpoint: None,
            format: OutputFormat::default(),
            output: None,
            date_format: Page::DEFAULT_DATE_FORMAT.to_string(),
            show_total: true,
        }
    }
}

/// Fetch, aggregate and render release download statistics.
#[tracing::instrument(skip(runtime, options))]
pub async fn stats<R: Runtime>(runtime: R, options: StatsOptions) -> Result<Outcome> {
    let config = Config::new(options.api_url.clone())?;
    run(runtime, config.provider, options).await
}

#[tracing::instrument(skip(runtime, provider, options))]
pub async fn run<R: Runtime, P: Provider>(
    runtime: R,
    provider: P,
    options: StatsOptions,
) -> Result<Outcome> {
    let endpoint = resolve_endpoint(&provider, &options)?;
    info!("Fetching release statistics from {}", endpoint);

    let (outcome, document) = match options.format {
        OutputFormat::Json => {
            let mut aggregator = StatsAggregator::new(provider, JsonReport::new());
            let outcome = aggregator.run(&endpoint).await?;
            let document = format!("{}\n", aggregator.into_renderer().output());
            (outcome, document)
        }
        OutputFormat::Text | OutputFormat::Html => {
            let mut page = Page::new(&options.date_format)?;
            if !options.show_total {
                page = page.without_total_label();
            }
            let mut aggregator = StatsAggregator::new(provider, page);
            let outcome = aggregator.run(&endpoint).await?;
            let page = aggregator.into_renderer();
            let document = if options.format == OutputFormat::Html {
                page.to_html()
            } else {
                page.to_text()
            };
            (outcome, document)
        }
    };

    emit(&runtime, options.output.as_deref(), &document)?;
    Ok(outcome)
}

fn resolve_endpoint<P: Provider>(provider: &P, options: &StatsOptions) -> Result<String> {
    if let Some(endpoint) = &options.endpoint {
        debug!("Using explicit endpoint {}", endpoint);
        return Ok(endpoint.clone());
    }
    let repo = options.repo.parse::<RepoId>()?;
    Ok(provider.releases_url(&repo))
}

fn emit<R: Runtime>(runtime: &R, output: Option<&Path>, document: &str) -> Result<()> {
    let Some(path) = output else {
        return runtime.print(document);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        runtime.create_dir_all(parent)?;
    }
    runtime
        .write(path, document.as_bytes())
        .with_context(|| format!("Failed to write statistics to {}", path.display()))?;
    info!("Wrote statistics to {}", path.display());
    Ok(())
}
