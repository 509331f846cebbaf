//! Rendering targets for download statistics.
//!
//! - `page` - release list plus total label, emitted as text or HTML
//! - `json` - machine-readable report

mod json;
mod page;

use anyhow::Result;
use clap::ValueEnum;

use crate::stats::AggregateResult;

pub use json::JsonReport;
pub use page::{Block, Page, Row};

/// Text shown in place of the release list when statistics cannot be loaded.
pub const ERROR_PLACEHOLDER: &str = "Error loading statistics.";

/// A target that displays either statistics or an error placeholder.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// Replace any previous content with one row per summary and update the
    /// total, if the target has a place for it.
    fn render(&mut self, result: &AggregateResult) -> Result<()>;

    /// Replace any previous content with the error placeholder. The total is
    /// left as it was.
    fn render_error(&mut self) -> Result<()>;
}

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}
