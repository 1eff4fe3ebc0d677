//! Merging per-source results into a single report order.

use crate::models::JobRecord;
use crate::sources::JobSource;
use tracing::{info, instrument};

/// Concatenate `lists` in the given order, then sort by `source`.
///
/// The sort is stable, so records sharing a source keep the order their
/// source produced them in. Duplicates across sources are kept.
///
/// # Arguments
///
/// * `lists` - One list per source, in source-invocation order
///
/// # Returns
///
/// All records, ordered by ascending `source` label.
pub fn merge<I>(lists: I) -> Vec<JobRecord>
where
    I: IntoIterator<Item = Vec<JobRecord>>,
{
    let mut merged: Vec<JobRecord> = lists.into_iter().flatten().collect();
    merged.sort_by(|a, b| a.source.cmp(&b.source));
    merged
}

/// Fetch every source one after another and merge the results.
///
/// Each fetch is awaited before the next one starts. Sources absorb their
/// own failures, so this never errors; a broken source contributes nothing.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn collect(sources: &[Box<dyn JobSource>]) -> Vec<JobRecord> {
    let mut lists = Vec::with_capacity(sources.len());
    for source in sources {
        let jobs = source.fetch().await;
        info!(source = source.name(), count = jobs.len(), "Source finished");
        lists.push(jobs);
    }
    let merged = merge(lists);
    info!(count = merged.len(), "Merged jobs from all sources");
    merged
}
