//! # job_radar
//!
//! Collects Werkstudent job postings from several sources, keeps the ones
//! whose titles match a keyword list, and writes a dated plain-text report.
//!
//! ## Architecture
//!
//! The run is a single sequential pass:
//! 1. **Fetching**: each [`sources::JobSource`] issues one request
//! 2. **Filtering**: titles are checked with [`matcher::KeywordMatcher`]
//! 3. **Merging**: [`aggregate::merge`] concatenates and sorts by source
//! 4. **Output**: [`outputs::report`] writes `{results_dir}/{DDMMYY}_Result.txt`

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod matcher;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod sources;
pub mod utils;
