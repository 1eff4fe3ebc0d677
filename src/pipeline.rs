//! The end-to-end run: fetch every source, merge, write the report.

use crate::aggregate;
use crate::outputs::report;
use crate::sources::JobSource;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Run all sources in order and write today's report into `results_dir`.
#[instrument(level = "info", skip_all, fields(results_dir = %results_dir.as_ref().display()))]
pub async fn run(
    sources: &[Box<dyn JobSource>],
    results_dir: impl AsRef<Path>,
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let jobs = aggregate::collect(sources).await;
    report::write_report(&jobs, results_dir).await
}
