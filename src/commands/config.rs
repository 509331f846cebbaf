use anyhow::Result;
use reqwest::Client;

use crate::{http::HttpClient, provider::GitHubProvider};

/// User agent sent with every request; the GitHub API rejects requests without one.
pub const USER_AGENT: &str = "relstats-cli";

pub struct Config<P> {
    pub provider: P,
}

impl Config<GitHubProvider> {
    pub fn new(api_url: Option<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let provider = GitHubProvider::new(HttpClient::new(client), api_url);

        Ok(Self { provider })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use mockito::Server;

    #[test]
    fn test_config_default_api_url() {
        let config = Config::new(None).unwrap();
        let repo = "owner/repo".parse().unwrap();
        assert_eq!(
            config.provider.releases_url(&repo),
            "https://api.github.com/repos/owner/repo/releases"
        );
    }

    #[tokio::test]
    async fn test_config_sends_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/owner/repo/releases")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = Config::new(Some(server.url())).unwrap();
        let endpoint = config.provider.releases_url(&"owner/repo".parse().unwrap());
        let releases = config.provider.get_releases(&endpoint).await.unwrap();

        mock.assert_async().await;
        assert!(releases.is_empty());
    }
}
