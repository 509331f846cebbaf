use anyhow::Result;
use clap::Parser;
use relstats::commands::{DEFAULT_REPO, StatsOptions, stats};
use relstats::render::{OutputFormat, Page};
use std::path::PathBuf;
use std::process::ExitCode;

/// relstats - Release download statistics
///
/// Fetch the releases of a GitHub repository and list how often each one was
/// downloaded, followed by the total over all releases.
///
/// Examples:
///   relstats                                   # Statistics for thedevil4k/FTORRENT
///   relstats owner/repo                        # Statistics for owner/repo
///   relstats owner/repo -f html -o stats.html  # Write an HTML page
#[derive(Parser, Debug)]
#[command(author, version = env!("RELSTATS_VERSION"), about)]
struct Cli {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Full release-list URL; overrides OWNER/REPO and --api-url
    #[arg(long, env = "RELSTATS_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// strftime pattern used for release dates, which are shown in UTC
    #[arg(long = "date-format", value_name = "FORMAT", default_value = Page::DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Leave the total-downloads label out of the page
    #[arg(long = "no-total")]
    pub no_total: bool,
}

impl From<Cli> for StatsOptions {
    fn from(cli: Cli) -> Self {
        StatsOptions {
            repo: cli.repo,
            api_url: cli.api_url,
            endpoint: cli.endpoint,
            format: cli.format,
            output: cli.output,
            date_format: cli.date_format,
            show_total: !cli.no_total,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = relstats::runtime::RealRuntime;

    let outcome = stats(runtime, cli.into()).await?;
    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["relstats"]).unwrap();
        assert_eq!(cli.repo, "thedevil4k/FTORRENT");
        assert_eq!(cli.api_url, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.output, None);
        assert_eq!(cli.date_format, "%Y-%m-%d");
        assert!(!cli.no_total);
    }

    #[test]
    fn test_cli_repo_parsing() {
        let cli = Cli::try_parse_from(["relstats", "owner/repo"]).unwrap();
        assert_eq!(cli.repo, "owner/repo");
    }

    #[test]
    fn test_cli_html_output_parsing() {
        let cli = Cli::try_parse_from([
            "relstats",
            "owner/repo",
            "--format",
            "html",
            "--output",
            "/tmp/stats.html",
            "--no-total",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Html);
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/stats.html")));

        let options = StatsOptions::from(cli);
        assert!(!options.show_total);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["relstats", "-f", "json", "-o", "out.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_cli_endpoint_and_api_url() {
        let cli = Cli::try_parse_from([
            "relstats",
            "--endpoint",
            "http://localhost/releases",
            "--api-url",
            "http://localhost",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost/releases"));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost"));
    }

    #[test]
    fn test_cli_date_format_help_mentions_utc() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("shown in UTC"));
    }

    #[test]
    fn test_cli_unknown_format_fails() {
        let result = Cli::try_parse_from(["relstats", "--format", "xml"]);
        assert!(result.is_err());
    }
}
