//! GitHub provider implementation.

use async_trait::async_trait;
use log::debug;

use crate::http::{FetchFailure, HttpClient};

use super::{Provider, Release, ReleaseAsset, RepoId};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response schema (internal).
///
/// Anything that does not match is rejected while decoding, so a malformed
/// payload never reaches the aggregation.
mod api {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub published_at: Option<DateTime<Utc>>,
        #[serde(default)]
        pub assets: Option<Vec<Asset>>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        #[serde(default)]
        pub name: Option<String>,
        pub download_count: u64,
    }
}

/// GitHub provider implementation.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create from an existing HttpClient, defaulting to the public API.
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    fn releases_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }

    #[tracing::instrument(skip(self))]
    async fn get_releases(&self, endpoint: &str) -> Result<Vec<Release>, FetchFailure> {
        debug!("Fetching releases from {}...", endpoint);
        let parsed: Vec<api::Release> = self.http_client.get_json(endpoint).await?;
        debug!("Fetched {} release(s)", parsed.len());
        Ok(parsed.into_iter().map(Release::from).collect())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            name: r.name,
            published_at: r.published_at,
            assets: r
                .assets
                .unwrap_or_default()
                .into_iter()
                .map(ReleaseAsset::from)
                .collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name.unwrap_or_default(),
            download_count: a.download_count,
        }
    }
}
