//! HTTP client module: a single GET per request and failure classification.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{FailureStage, FetchFailure};
