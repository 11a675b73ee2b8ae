use crate::modules::search::domain::SearchKey;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Consecutive-failure bookkeeping for one search key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub consecutive_failures: u32,
    pub first_failure_at: Option<DateTime<Utc>>,
    pub last_failure_at: Option<DateTime<Utc>>,
    pub last_success_at: Option<DateTime<Utc>>,
    /// Reason from the most recent failure classification, frozen so the
    /// stop short-circuit can surface it without calling providers again
    pub last_failure_reason: Option<String>,
}

/// Per-key consecutive-failure counter with a stop threshold.
///
/// Keys are the same composite `SearchKey` values the cache uses. Updates go
/// through the DashMap entry API, so simultaneous failures for one key never
/// lose increments.
#[derive(Debug)]
pub struct FailureTracker {
    records: DashMap<SearchKey, FailureRecord>,
    max_failures: u32,
}

impl FailureTracker {
    pub fn new(max_failures: u32) -> Self {
        Self {
            records: DashMap::new(),
            max_failures,
        }
    }

    /// Record one effective failure for a key and return the new consecutive
    /// count. `reason` becomes the frozen `last_failure_reason`.
    pub fn record_failure(&self, key: &SearchKey, reason: &str) -> u32 {
        let now = Utc::now();
        let mut record = self.records.entry(key.clone()).or_default();
        record.consecutive_failures += 1;
        if record.first_failure_at.is_none() {
            record.first_failure_at = Some(now);
        }
        record.last_failure_at = Some(now);
        record.last_failure_reason = Some(reason.to_string());

        let count = record.consecutive_failures;
        debug!(
            "Recorded failure {} for {}: {}",
            count,
            key.describe(),
            reason
        );
        count
    }

    /// Record a success for a key, resetting its consecutive-failure streak.
    /// A cache hit counts as a success. Records only exist for keys that have
    /// failed before, so a success on a clean key is a no-op and the map
    /// never grows with healthy searches.
    pub fn record_success(&self, key: &SearchKey) {
        if let Some(mut record) = self.records.get_mut(key) {
            record.consecutive_failures = 0;
            record.first_failure_at = None;
            record.last_failure_reason = None;
            record.last_success_at = Some(Utc::now());
            debug!("Recorded success for {}", key.describe());
        }
    }

    pub fn failure_count(&self, key: &SearchKey) -> u32 {
        self.records
            .get(key)
            .map(|record| record.consecutive_failures)
            .unwrap_or(0)
    }

    /// True once the key has reached the configured failure threshold
    pub fn should_stop_pagination(&self, key: &SearchKey) -> bool {
        self.failure_count(key) >= self.max_failures
    }

    pub fn last_failure_reason(&self, key: &SearchKey) -> Option<String> {
        self.records
            .get(key)
            .and_then(|record| record.last_failure_reason.clone())
    }

    /// Full record for monitoring; `None` for never-seen keys
    pub fn snapshot(&self, key: &SearchKey) -> Option<FailureRecord> {
        self.records.get(key).map(|record| record.clone())
    }

    /// Drop all state for a key
    pub fn reset(&self, key: &SearchKey) {
        self.records.remove(key);
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.records.len()
    }
}
