//! Data models for job postings.
//!
//! [`JobRecord`] is the normalized shape every source produces. Source-specific
//! wire formats live next to their source in [`crate::sources`].

use serde::Serialize;

/// A single job posting, normalized across sources.
///
/// Records are created while a source parses its response and are never
/// mutated afterwards. Optional fields stay `None` when the upstream posting
/// leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    /// The role title as published.
    pub title: String,
    /// The hiring company, if given.
    pub company: Option<String>,
    /// Free-text location, if given.
    pub location: Option<String>,
    /// Link to the posting or an apply page.
    pub url: Option<String>,
    /// Provenance label, e.g. `"ArbeitNow"` or `"via LinkedIn"`.
    pub source: String,
}

impl JobRecord {
    /// Build a record with only the required fields set.
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: None,
            location: None,
            url: None,
            source: source.into(),
        }
    }
}
