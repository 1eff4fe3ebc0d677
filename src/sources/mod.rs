//! Job posting sources.
//!
//! Each source queries one external API and turns its response into
//! filtered [`JobRecord`]s. All of them follow the same contract:
//!
//! - one request per run, issued when [`JobSource::fetch`] is awaited
//! - failures (transport errors, non-success statuses, unparseable bodies)
//!   are logged and produce an empty list instead of aborting the run
//! - output keeps the upstream order
//!
//! # Supported Sources
//!
//! | Source | Module | Auth | Filtering |
//! |--------|--------|------|-----------|
//! | ArbeitNow | [`arbeitnow`] | none | positive keywords, then negative substrings |
//! | Google Jobs via SerpApi | [`serpapi`] | `SERPAPI_KEY` | positive keywords (query is pre-filtered) |

use crate::config::Config;
use crate::models::JobRecord;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

pub mod arbeitnow;
pub mod serpapi;

/// Error type used inside sources before it is absorbed at the
/// [`JobSource::fetch`] boundary.
pub type SourceError = Box<dyn Error + Send + Sync>;

/// A provider of job postings.
///
/// Implementors never return an error: a failed fetch is logged and yields
/// no records, so one broken source cannot take the whole report down.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Fetch, filter and normalize this source's postings.
    async fn fetch(&self) -> Vec<JobRecord>;
}

/// Read an optional text field without failing the surrounding record.
///
/// Upstream APIs occasionally send a list or a number where a string is
/// documented (e.g. `"location": ["Berlin", "Remote"]`). Anything that is not
/// a JSON string becomes `None`. Pair with `#[serde(default)]` so a missing
/// field is `None` as well.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

/// Build the HTTP client shared by all sources.
///
/// # Arguments
///
/// * `config` - Run configuration; only `request_timeout_secs` is read
///
/// # Returns
///
/// A client with the crate user agent and, if configured, a per-request
/// timeout. Without one, reqwest's defaults apply.
pub fn build_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder =
        reqwest::Client::builder().user_agent(concat!("job_radar/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_string")]
        location: Option<String>,
    }

    #[test]
    fn test_lenient_string_accepts_only_strings() {
        let parse = |v: Value| serde_json::from_value::<Sample>(v).unwrap().location;
        assert_eq!(parse(json!({ "location": "Berlin" })).as_deref(), Some("Berlin"));
        assert_eq!(parse(json!({ "location": ["Berlin", "Remote"] })), None);
        assert_eq!(parse(json!({ "location": 7 })), None);
        assert_eq!(parse(json!({ "location": null })), None);
        assert_eq!(parse(json!({})), None);
    }

    #[test]
    fn test_build_client_with_and_without_timeout() {
        let mut config = Config::default();
        assert!(build_client(&config).is_ok());
        config.request_timeout_secs = Some(5);
        assert!(build_client(&config).is_ok());
    }
}
