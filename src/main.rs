//! # job_radar
//!
//! Fetches job postings from ArbeitNow and, when `SERPAPI_KEY` is set, from
//! Google Jobs via SerpApi. Matching postings are written to a daily report.
//!
//! ## Usage
//!
//! ```sh
//! SERPAPI_KEY=... job_radar
//! ```

use clap::Parser;
use job_radar::cli::Cli;
use job_radar::config::Config;
use job_radar::pipeline;
use job_radar::sources::arbeitnow::ArbeitNowSource;
use job_radar::sources::serpapi::SerpApiSource;
use job_radar::sources::{JobSource, build_client};
use job_radar::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("job_radar starting up");

    let args = Cli::parse();
    debug!(
        config = ?args.config,
        results_dir = ?args.results_dir,
        serpapi_key_set = args.serpapi_key.is_some(),
        "Parsed CLI arguments"
    );

    let mut config = match &args.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = args.results_dir {
        config.results_dir = dir;
    }

    // Fail before any network traffic if the report cannot be written.
    if let Err(e) = ensure_writable_dir(&config.results_dir).await {
        error!(
            path = %config.results_dir,
            error = %e,
            "Results directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let client = build_client(&config)?;
    let sources: Vec<Box<dyn JobSource>> = vec![
        Box::new(ArbeitNowSource::new(client.clone(), &config)?),
        Box::new(SerpApiSource::new(client, &config, args.serpapi_key)?),
    ];

    let path = pipeline::run(&sources, &config.results_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        path = %path.display(),
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
