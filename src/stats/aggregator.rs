//! Fetch, aggregate and render in one pass.

use anyhow::Result;
use log::{debug, error};

use crate::http::FetchFailure;
use crate::provider::Provider;
use crate::render::Renderer;

use super::{AggregateResult, summarize};

/// Terminal state of a [`StatsAggregator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Statistics were computed and rendered
    Success(AggregateResult),
    /// The fetch failed and the error placeholder was rendered
    Failure(FetchFailure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Computes download statistics from a provider and hands them to a renderer.
pub struct StatsAggregator<P: Provider, R: Renderer> {
    provider: P,
    renderer: R,
}

impl<P: Provider, R: Renderer> StatsAggregator<P, R> {
    pub fn new(provider: P, renderer: R) -> Self {
        Self { provider, renderer }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Fetch the releases at `endpoint` and reduce them to statistics.
    ///
    /// Either the whole collection is aggregated or a [`FetchFailure`] is
    /// returned.
    #[tracing::instrument(skip(self))]
    pub async fn compute_stats(&self, endpoint: &str) -> Result<AggregateResult, FetchFailure> {
        let releases = self.provider.get_releases(endpoint).await?;
        let result = summarize(releases).map_err(|e| FetchFailure::malformed(endpoint, e))?;
        debug!(
            "{} release(s), {} download(s) in total",
            result.summaries.len(),
            result.total_downloads
        );
        Ok(result)
    }

    /// Compute statistics and render them, or render the error placeholder.
    ///
    /// A fetch failure is logged and reported through [`Outcome::Failure`];
    /// only renderer errors are returned as `Err`.
    #[tracing::instrument(skip(self))]
    pub async fn run(&mut self, endpoint: &str) -> Result<Outcome> {
        match self.compute_stats(endpoint).await {
            Ok(result) => {
                self.renderer.render(&result)?;
                Ok(Outcome::Success(result))
            }
            Err(failure) => {
                error!("Error fetching stats: {}", failure);
                self.renderer.render_error()?;
                Ok(Outcome::Failure(failure))
            }
        }
    }
}
