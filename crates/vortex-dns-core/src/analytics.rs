use std::sync::Arc;

use anyhow::Context as _;
use async_trait::async_trait;
use hashlink::LinkedHashMap;

use crate::{AggregationBucket, FilterError, QueryRecord};

/// Supplies the decoded query history. The appliance records queries on
/// its own; analytics only ever reads an already materialized snapshot.
#[async_trait]
pub trait QueryLogSource: Send + Sync {
    async fn fetch_log(&self) -> anyhow::Result<Vec<QueryRecord>>;
}

/// Counts records grouped by an arbitrary key.
///
/// A single pass over the log with an insertion-ordered map: buckets come
/// out in the order their key was first encountered, while each lookup
/// stays O(1). With `blocked_only` set, records that were not blocked do
/// not contribute to any bucket.
pub fn grouped_counts<'a, F>(log: &'a [QueryRecord], blocked_only: bool, key: F) -> Vec<AggregationBucket>
where
    F: Fn(&'a QueryRecord) -> &'a str,
{
    let mut counts: LinkedHashMap<&str, u64> = LinkedHashMap::new();
    for record in log {
        if blocked_only && !record.blocked {
            continue;
        }
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(label, count)| AggregationBucket {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Records with `from <= timestamp <= until`, in their original relative
/// order. An inverted range is simply empty, not an error.
pub fn history_between(log: &[QueryRecord], from: u32, until: u32) -> Vec<QueryRecord> {
    log.iter()
        .filter(|record| record.timestamp >= from && record.timestamp <= until)
        .cloned()
        .collect()
}

/// Grouped counts and history views over the appliance's query log.
pub struct Analytics {
    source: Arc<dyn QueryLogSource>,
}

impl Analytics {
    pub fn new(source: Arc<dyn QueryLogSource>) -> Self {
        Analytics { source }
    }

    async fn snapshot(&self) -> Result<Vec<QueryRecord>, FilterError> {
        let log = self
            .source
            .fetch_log()
            .await
            .context("failed to fetch the query log")?;
        Ok(log)
    }

    /// Query counts grouped by record type.
    pub async fn query_type_counts(&self) -> Result<Vec<AggregationBucket>, FilterError> {
        let log = self.snapshot().await?;
        Ok(grouped_counts(&log, false, |record| record.record_type.as_str()))
    }

    /// Blocked queries grouped by requested domain.
    pub async fn top_blocked_domains(&self) -> Result<Vec<AggregationBucket>, FilterError> {
        let log = self.snapshot().await?;
        Ok(grouped_counts(&log, true, |record| record.domain.as_str()))
    }

    /// Queries grouped by requesting client.
    pub async fn client_counts(&self) -> Result<Vec<AggregationBucket>, FilterError> {
        let log = self.snapshot().await?;
        Ok(grouped_counts(&log, false, |record| record.client.as_str()))
    }

    /// Queries grouped by requested domain, blocked or not.
    pub async fn domain_counts(&self) -> Result<Vec<AggregationBucket>, FilterError> {
        let log = self.snapshot().await?;
        Ok(grouped_counts(&log, false, |record| record.domain.as_str()))
    }

    /// The full decoded history, as supplied by the log source.
    pub async fn history(&self) -> Result<Vec<QueryRecord>, FilterError> {
        self.snapshot().await
    }

    /// History restricted to `from <= timestamp <= until`, inclusive on
    /// both ends.
    pub async fn history_in_range(&self, from: u32, until: u32) -> Result<Vec<QueryRecord>, FilterError> {
        let log = self.snapshot().await?;
        Ok(history_between(&log, from, until))
    }
}
