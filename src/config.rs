//! Runtime configuration.
//!
//! Every component receives its settings from a [`Config`] at construction
//! time. The defaults reproduce the built-in search (Werkstudent roles in
//! cloud and security engineering, Germany, last 24 hours); an optional YAML
//! file can override any subset of fields.
//!
//! ```yaml
//! positive_keywords: ["DevSecOps", "Terraform"]
//! results_dir: ./reports
//! serpapi:
//!   location: Munich
//! ```

use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};

/// Top-level settings for a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terms that qualify a title; matched on word boundaries.
    pub positive_keywords: Vec<String>,
    /// Terms that disqualify an ArbeitNow title; matched as plain substrings.
    pub negative_keywords: Vec<String>,
    /// Directory the daily report is written into.
    pub results_dir: String,
    /// Optional per-request timeout applied to the shared HTTP client.
    pub request_timeout_secs: Option<u64>,
    pub arbeitnow: ArbeitNowConfig,
    pub serpapi: SerpApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            positive_keywords: [
                "DevSecOps",
                "Cloud Security",
                "Platform Engineering",
                "Infrastructure as Code",
                "Application Security",
                "Terraform",
                "AWS",
            ]
            .map(String::from)
            .to_vec(),
            negative_keywords: ["Senior", "Lead", "Principal", "Head of", "Marketing", "Sales"]
                .map(String::from)
                .to_vec(),
            results_dir: "job_results".to_string(),
            request_timeout_secs: None,
            arbeitnow: ArbeitNowConfig::default(),
            serpapi: SerpApiConfig::default(),
        }
    }
}

/// Settings for the ArbeitNow job-board source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArbeitNowConfig {
    pub endpoint: String,
}

impl Default for ArbeitNowConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.arbeitnow.com/api/job-board-api".to_string(),
        }
    }
}

/// Settings for the SerpApi Google Jobs source.
///
/// `language`, `country` and `recency` map onto SerpApi's `hl`, `gl` and
/// `tbs` parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SerpApiConfig {
    pub endpoint: String,
    /// Prefix placed in front of the keyword disjunction.
    pub role_qualifier: String,
    pub language: String,
    pub country: String,
    pub location: String,
    pub recency: String,
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://serpapi.com/search.json".to_string(),
            role_qualifier: "Werkstudent".to_string(),
            language: "en".to_string(),
            country: "de".to_string(),
            location: "Germany".to_string(),
            recency: "qdr:d".to_string(),
        }
    }
}

impl Config {
    /// Load a config from a YAML file. Fields missing from the file keep their
    /// defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// [`Config`].
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&raw)?;
        info!(
            positive = config.positive_keywords.len(),
            negative = config.negative_keywords.len(),
            results_dir = %config.results_dir,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }
}
