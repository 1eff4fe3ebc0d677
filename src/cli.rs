//! Command-line interface definitions for job_radar.
//!
//! Every argument is optional; a bare `job_radar` runs the built-in search
//! and writes to `./job_results`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for job_radar.
///
/// # Examples
///
/// ```sh
/// # Built-in search, ArbeitNow only unless SERPAPI_KEY is exported
/// job_radar
///
/// # Custom keywords and output directory
/// job_radar -c ./job_radar.yaml -o ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the daily report (overrides the config file)
    #[arg(short = 'o', long)]
    pub results_dir: Option<String>,

    /// SerpApi key; the Google Jobs source is skipped without one
    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    pub serpapi_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["job_radar"]);
        assert!(cli.config.is_none());
        assert!(cli.results_dir.is_none());
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "job_radar",
            "--config",
            "./job_radar.yaml",
            "--results-dir",
            "./reports",
            "--serpapi-key",
            "abc123",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("./job_radar.yaml")));
        assert_eq!(cli.results_dir.as_deref(), Some("./reports"));
        assert_eq!(cli.serpapi_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["job_radar", "-c", "/tmp/c.yaml", "-o", "/tmp/out"]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
        assert_eq!(cli.results_dir.as_deref(), Some("/tmp/out"));
    }
}
