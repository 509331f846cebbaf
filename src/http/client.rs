//! HTTP client performing one request per call, with no retries.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::FetchFailure;

/// HTTP client for fetching JSON documents.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Any failure, whether transport, status or decoding, is reported as a
    /// [`FetchFailure`] and no partial value is produced.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchFailure> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", url, status);
            return Err(FetchFailure::status(url, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::transport(url, e))?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| FetchFailure::malformed(url, e))
    }
}
