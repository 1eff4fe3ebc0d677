//! Google Jobs source, queried through [SerpApi](https://serpapi.com).
//!
//! Google Jobs aggregates LinkedIn, Xing, Indeed and company career pages,
//! which cannot be queried directly without running into CAPTCHAs. All
//! keywords are folded into a single query so one request (one API credit)
//! covers the whole search:
//!
//! ```text
//! Werkstudent ("DevSecOps" OR "Cloud Security" OR "AWS")
//! ```
//!
//! The source is skipped entirely when no API key is configured.

use super::{JobSource, SourceError, lenient_string};
use crate::config::{Config, SerpApiConfig};
use crate::matcher::KeywordMatcher;
use crate::models::JobRecord;
use crate::utils::truncate_for_log;
use async_trait::async_trait;
use itertools::Itertools;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use url::Url;

/// Label used when a result does not say which platform it came from.
pub const DEFAULT_VIA: &str = "Google Jobs";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    jobs_results: Vec<Value>,
}

/// One `jobs_results` entry. Text fields tolerate unexpected types, and
/// `related_links` is kept raw so a malformed entry cannot reject the result.
#[derive(Debug, Deserialize)]
struct JobResult {
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    via: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    share_link: Option<String>,
    #[serde(default)]
    related_links: Option<Value>,
}

impl JobResult {
    /// Prefer the first related (usually direct-apply) link over the
    /// Google share link.
    fn best_link(&self) -> Option<String> {
        self.related_links
            .as_ref()
            .and_then(|links| links.get(0))
            .and_then(|first| first.get("link"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| self.share_link.clone())
    }

    fn provenance(&self) -> String {
        self.via
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VIA)
            .to_string()
    }
}

/// Google Jobs search through SerpApi as a [`JobSource`].
///
/// The API key is optional; without one [`JobSource::fetch`] returns
/// immediately.
pub struct SerpApiSource {
    client: reqwest::Client,
    settings: SerpApiConfig,
    api_key: Option<String>,
    keywords: Vec<String>,
    positive: KeywordMatcher,
}

impl SerpApiSource {
    /// Create the source from the run configuration.
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client (see [`super::build_client`])
    /// * `config` - Supplies the search settings and positive keywords
    /// * `api_key` - SerpApi key; `None` or blank disables the source
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if a positive keyword cannot be compiled.
    pub fn new(
        client: reqwest::Client,
        config: &Config,
        api_key: Option<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            client,
            settings: config.serpapi.clone(),
            api_key,
            keywords: config.positive_keywords.clone(),
            positive: KeywordMatcher::new(&config.positive_keywords)?,
        })
    }

    /// The search query sent as `q`.
    pub fn query(&self) -> String {
        build_query(&self.settings.role_qualifier, &self.keywords)
    }

    /// Full request URL for `api_key`, including all search parameters.
    fn request_url(&self, api_key: &str) -> Result<Url, url::ParseError> {
        let query = self.query();
        Url::parse_with_params(
            &self.settings.endpoint,
            &[
                ("engine", "google_jobs"),
                ("q", query.as_str()),
                ("hl", self.settings.language.as_str()),
                ("gl", self.settings.country.as_str()),
                ("location", self.settings.location.as_str()),
                ("tbs", self.settings.recency.as_str()),
                ("api_key", api_key),
            ],
        )
    }

    /// Run the search with `api_key`.
    ///
    /// An absent or blank key skips the source without touching the network.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Key sent as `api_key`; surrounding whitespace is ignored
    ///
    /// # Returns
    ///
    /// Matching results in upstream order, each tagged with its `via`
    /// label. Transport and decoding failures are returned as errors.
    #[instrument(level = "info", skip_all, fields(endpoint = %self.settings.endpoint))]
    pub async fn fetch_with_key(&self, api_key: Option<&str>) -> Result<Vec<JobRecord>, SourceError> {
        let Some(api_key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            info!("Skipping SerpApi (no API key configured)");
            return Ok(Vec::new());
        };

        info!(query = %self.query(), "Searching Google Jobs via SerpApi");
        let url = self.request_url(api_key)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                %status,
                body = %truncate_for_log(&body, 300),
                "SerpApi returned a non-success status"
            );
            return Ok(Vec::new());
        }

        let search: SearchResponse = response.json().await?;
        info!(count = search.jobs_results.len(), "Received SerpApi results");
        Ok(self.filter_results(search.jobs_results))
    }

    fn filter_results(&self, raw: Vec<Value>) -> Vec<JobRecord> {
        raw.into_iter()
            .filter_map(|value| match serde_json::from_value::<JobResult>(value) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed SerpApi result");
                    None
                }
            })
            .filter(|result| self.positive.is_match(result.title.as_deref()))
            .filter_map(|result| {
                let url = result.best_link();
                let source = result.provenance();
                Some(JobRecord {
                    title: result.title?,
                    company: result.company_name,
                    location: result.location,
                    url,
                    source,
                })
            })
            .collect()
    }
}

/// Combine the role qualifier with an OR of the individually quoted keywords.
///
/// Blank keywords are left out.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(build_query("Werkstudent", &["AWS", "Terraform"]), r#"Werkstudent ("AWS" OR "Terraform")"#);
/// ```
pub fn build_query<S: AsRef<str>>(role_qualifier: &str, keywords: &[S]) -> String {
    let disjunction = keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .map(|k| format!("\"{k}\""))
        .join(" OR ");
    format!("{role_qualifier} ({disjunction})")
}

#[async_trait]
impl JobSource for SerpApiSource {
    fn name(&self) -> &str {
        "SerpApi"
    }

    async fn fetch(&self) -> Vec<JobRecord> {
        match self.fetch_with_key(self.api_key.as_deref()).await {
            Ok(jobs) => {
                info!(count = jobs.len(), source = self.name(), "Matched SerpApi jobs");
                jobs
            }
            Err(e) => {
                error!(error = %e, source = self.name(), "SerpApi fetch failed");
                Vec::new()
            }
        }
    }
}
