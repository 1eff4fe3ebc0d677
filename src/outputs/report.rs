//! Plain-text report generation.
//!
//! One report is written per calendar day to
//! `{results_dir}/{DDMMYY}_Result.txt`. Re-running on the same day replaces
//! the file. A report looks like this:
//!
//! ```text
//! JOB SEARCH REPORT - 2026-10-19
//! Total Jobs Found: 1
//! Sources: {
//!   "ArbeitNow": 1
//! }
//! ==================================================
//!
//! Role:     DevSecOps Werkstudent
//! Company:  Acme GmbH
//! Location: Munich
//! Source:   ArbeitNow
//! Link:     https://www.arbeitnow.com/jobs/acme/devsecops
//! --------------------------------------------------
//! ```

use crate::models::JobRecord;
use chrono::{Local, NaiveDate};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

const SEPARATOR_WIDTH: usize = 50;
const MISSING: &str = "N/A";

/// Report file name for `date`, e.g. `191026_Result.txt`.
pub fn report_filename(date: NaiveDate) -> String {
    format!("{}_Result.txt", date.format("%d%m%y"))
}

/// Render the full report text for `jobs` as of `date`.
///
/// # Arguments
///
/// * `jobs` - Records in the order they should appear
/// * `date` - Date printed in the header line
///
/// # Returns
///
/// The complete file contents, or an error if the per-source counts cannot
/// be serialized.
pub fn render_report(jobs: &[JobRecord], date: NaiveDate) -> Result<String, Box<dyn Error + Send + Sync>> {
    let per_source: BTreeMap<&str, usize> = jobs
        .iter()
        .map(|j| j.source.as_str())
        .counts()
        .into_iter()
        .collect();

    let mut out = String::new();
    writeln!(out, "JOB SEARCH REPORT - {}", date.format("%Y-%m-%d"))?;
    writeln!(out, "Total Jobs Found: {}", jobs.len())?;
    writeln!(out, "Sources: {}", serde_json::to_string_pretty(&per_source)?)?;
    writeln!(out, "{}\n", "=".repeat(SEPARATOR_WIDTH))?;

    if jobs.is_empty() {
        writeln!(out, "No new matching jobs found in the last 24h.")?;
    }

    for job in jobs {
        writeln!(out, "Role:     {}", job.title)?;
        writeln!(out, "Company:  {}", job.company.as_deref().unwrap_or(MISSING))?;
        writeln!(out, "Location: {}", job.location.as_deref().unwrap_or(MISSING))?;
        writeln!(out, "Source:   {}", job.source)?;
        writeln!(out, "Link:     {}", job.url.as_deref().unwrap_or(MISSING))?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(out)
}

/// Write today's report into `results_dir`.
///
/// Uses the local date; see [`write_report_on`] for the file layout.
///
/// # Returns
///
/// The path of the written file, for logging by the caller.
pub async fn write_report(
    jobs: &[JobRecord],
    results_dir: impl AsRef<Path>,
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    write_report_on(jobs, results_dir, Local::now().date_naive()).await
}

/// Write the report for `date` into `results_dir`, creating the directory if
/// needed and overwriting any report already written for that day.
///
/// # Arguments
///
/// * `jobs` - Merged and sorted records
/// * `results_dir` - Base directory for reports
/// * `date` - Determines both the file name and the header date
///
/// # Returns
///
/// `{results_dir}/{DDMMYY}_Result.txt` on success, or an error if directory
/// creation or the file write fails.
#[instrument(level = "info", skip_all, fields(results_dir = %results_dir.as_ref().display(), %date))]
pub async fn write_report_on(
    jobs: &[JobRecord],
    results_dir: impl AsRef<Path>,
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let results_dir = results_dir.as_ref();
    if let Err(e) = fs::create_dir_all(results_dir).await {
        error!(error = %e, "Failed to create results dir");
        return Err(e.into());
    }

    let path = results_dir.join(report_filename(date));
    let text = render_report(jobs, date)?;
    fs::write(&path, text).await?;
    info!(path = %path.display(), count = jobs.len(), "Wrote job report");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 22).unwrap()
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename(date()), "221125_Result.txt");
        assert_eq!(
            report_filename(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()),
            "050126_Result.txt"
        );
    }

    #[test]
    fn test_render_job_block() {
        let job = JobRecord {
            title: "DevSecOps Werkstudent".to_string(),
            company: Some("Acme GmbH".to_string()),
            location: None,
            url: Some("https://example.com/1".to_string()),
            source: "ArbeitNow".to_string(),
        };
        let text = render_report(&[job], date()).unwrap();
        let expected = format!(
            "JOB SEARCH REPORT - 2025-11-22\n\
             Total Jobs Found: 1\n\
             Sources: {{\n  \"ArbeitNow\": 1\n}}\n\
             {eq}\n\n\
             Role:     DevSecOps Werkstudent\n\
             Company:  Acme GmbH\n\
             Location: N/A\n\
             Source:   ArbeitNow\n\
             Link:     https://example.com/1\n\
             {dash}\n",
            eq = "=".repeat(50),
            dash = "-".repeat(50),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_counts_per_source() {
        let jobs = vec![
            JobRecord::new("a", "ArbeitNow"),
            JobRecord::new("b", "via LinkedIn"),
            JobRecord::new("c", "via LinkedIn"),
        ];
        let text = render_report(&jobs, date()).unwrap();
        assert!(text.contains("Total Jobs Found: 3\n"));
        assert!(text.contains("\"ArbeitNow\": 1,\n  \"via LinkedIn\": 2"));
        assert!(!text.contains("No new matching jobs"));
    }

    #[tokio::test]
    async fn test_write_empty_report() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_report_on(&[], tmp.path(), date()).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.contains("Total Jobs Found: 0\n"));
        assert!(text.contains("Sources: {}\n"));
        assert!(text.contains("No new matching jobs found in the last 24h.\n"));
        assert!(!text.contains("Role:"));
    }

    #[tokio::test]
    async fn test_write_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("job_results");
        let path = write_report_on(&[], &dir, date()).await.unwrap();
        assert_eq!(path, dir.join("221125_Result.txt"));
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_same_day_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let first = write_report_on(
            &[
                JobRecord::new("AWS Werkstudent", "ArbeitNow"),
                JobRecord::new("Terraform Werkstudent", "ArbeitNow"),
            ],
            tmp.path(),
            date(),
        )
        .await
        .unwrap();
        let second = write_report_on(&[], tmp.path(), date()).await.unwrap();

        assert_eq!(first, second);
        let text = std::fs::read_to_string(&second).unwrap();
        assert!(text.contains("Total Jobs Found: 0\n"));
        assert!(!text.contains("AWS Werkstudent"));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_write_report_uses_today() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_report(&[], tmp.path()).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_Result.txt"));
        assert_eq!(name.len(), "DDMMYY_Result.txt".len());
    }
}
