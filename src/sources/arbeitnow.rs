//! ArbeitNow job-board source.
//!
//! [ArbeitNow](https://www.arbeitnow.com) publishes a free, unauthenticated
//! listing of mostly English-language tech jobs in Germany. The endpoint
//! returns one page of postings under the `data` key:
//!
//! ```json
//! { "data": [ { "title": "...", "company_name": "...", "location": "...", "url": "..." } ] }
//! ```
//!
//! A posting is kept when its title matches a positive keyword on word
//! boundaries and contains none of the negative keywords as a substring.

use super::{JobSource, SourceError, lenient_string};
use crate::config::Config;
use crate::matcher::{KeywordMatcher, contains_any};
use crate::models::JobRecord;
use crate::utils::truncate_for_log;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

/// Provenance label attached to every ArbeitNow record.
pub const SOURCE_LABEL: &str = "ArbeitNow";

#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    data: Vec<Value>,
}

/// One listing entry. Every field is optional and type-tolerant; a posting
/// is only dropped later if its title is missing or does not match.
#[derive(Debug, Deserialize)]
struct Posting {
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    url: Option<String>,
}

/// The ArbeitNow job board as a [`JobSource`].
///
/// Holds the compiled positive keywords and the raw negative list so that
/// filtering a listing does no further setup work.
pub struct ArbeitNowSource {
    client: reqwest::Client,
    endpoint: String,
    positive: KeywordMatcher,
    negative: Vec<String>,
}

impl ArbeitNowSource {
    /// Create the source from the run configuration.
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client (see [`super::build_client`])
    /// * `config` - Supplies the endpoint and both keyword lists
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if a positive keyword cannot be compiled.
    pub fn new(client: reqwest::Client, config: &Config) -> Result<Self, regex::Error> {
        Ok(Self {
            client,
            endpoint: config.arbeitnow.endpoint.clone(),
            positive: KeywordMatcher::new(&config.positive_keywords)?,
            negative: config.negative_keywords.clone(),
        })
    }

    /// Request the listing and filter it.
    ///
    /// A non-success status is logged and treated as an empty listing.
    ///
    /// # Returns
    ///
    /// The matching postings in upstream order, or an error for transport
    /// and body-decoding failures. [`JobSource::fetch`] turns that error into
    /// an empty list.
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn fetch_postings(&self) -> Result<Vec<JobRecord>, SourceError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                %status,
                body = %truncate_for_log(&body, 300),
                "ArbeitNow returned a non-success status"
            );
            return Ok(Vec::new());
        }

        let board: BoardResponse = response.json().await?;
        info!(count = board.data.len(), "Received ArbeitNow postings");
        Ok(self.filter_postings(board.data))
    }

    /// Keep the postings whose titles pass both keyword filters.
    ///
    /// Entries that are not JSON objects are skipped one by one; fields with
    /// unexpected types are carried as `None`.
    fn filter_postings(&self, raw: Vec<Value>) -> Vec<JobRecord> {
        raw.into_iter()
            .filter_map(|value| match serde_json::from_value::<Posting>(value) {
                Ok(posting) => Some(posting),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed ArbeitNow posting");
                    None
                }
            })
            .filter_map(|posting| {
                if !self.positive.is_match(posting.title.as_deref()) {
                    return None;
                }
                let title = posting.title?;
                if contains_any(&title, &self.negative) {
                    debug!(%title, "Rejected by negative keyword");
                    return None;
                }
                Some(JobRecord {
                    title,
                    company: posting.company_name,
                    location: posting.location,
                    url: posting.url,
                    source: SOURCE_LABEL.to_string(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for ArbeitNowSource {
    fn name(&self) -> &str {
        SOURCE_LABEL
    }

    async fn fetch(&self) -> Vec<JobRecord> {
        match self.fetch_postings().await {
            Ok(jobs) => {
                info!(count = jobs.len(), source = SOURCE_LABEL, "Matched ArbeitNow jobs");
                jobs
            }
            Err(e) => {
                error!(error = %e, source = SOURCE_LABEL, "ArbeitNow fetch failed");
                Vec::new()
            }
        }
    }
}
