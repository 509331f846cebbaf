//! Release source abstraction.
//!
//! A provider turns an endpoint into a validated, ordered list of releases.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::http::FetchFailure;

pub use github::GitHubProvider;

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A downloadable asset attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseAsset {
    pub name: String,
    /// Cumulative download counter reported by the provider
    pub download_count: u64,
}

/// A published release.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag: String,
    /// Release name/title
    pub name: Option<String>,
    /// Publication time, absent for drafts
    pub published_at: Option<DateTime<Utc>>,
    /// Downloadable assets, in provider order
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// The release name if set and non-empty, otherwise the tag.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag,
        }
    }
}

/// Trait for release sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Endpoint listing the releases of a repository.
    fn releases_url(&self, repo: &RepoId) -> String;

    /// Fetch the release collection served at `endpoint` with a single request.
    async fn get_releases(&self, endpoint: &str) -> Result<Vec<Release>, FetchFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parse() {
        let repo: RepoId = "owner/repo".parse().unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repo, "repo");
    }

    #[test]
    fn test_repo_id_display() {
        let repo = RepoId {
            owner: "owner".into(),
            repo: "repo".into(),
        };
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_repo_id_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_display_name_prefers_name() {
        let release = Release {
            tag: "v1.0".into(),
            name: Some("First stable".into()),
            ..Default::default()
        };
        assert_eq!(release.display_name(), "First stable");
    }

    #[test]
    fn test_display_name_falls_back_to_tag() {
        let empty = Release {
            tag: "v2.0".into(),
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.display_name(), "v2.0");

        let missing = Release {
            tag: "v3.0".into(),
            name: None,
            ..Default::default()
        };
        assert_eq!(missing.display_name(), "v3.0");
    }
}
