use std::time::Duration;

/// Tunables for the search aggregation engine.
///
/// The page thresholds encode an empirically chosen policy (deep pagination
/// combined with an active price filter is almost always past the real
/// result set); they are configuration, not invariants.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How long merged result sets stay cached
    pub cache_ttl: Duration,
    /// Upper bound on cached result sets before oldest-first eviction
    pub cache_max_entries: usize,
    /// Consecutive effective failures after which pagination stops for a key
    pub max_consecutive_failures: u32,
    /// Aggregate deadline for one fan-out across all selected marketplaces
    pub dispatch_deadline: Duration,
    /// Pages above this are "very high" when a price filter is active
    pub very_high_page_threshold: u32,
    /// Pages up to this are "early" for failure-reason wording
    pub early_page_threshold: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            cache_max_entries: 2000,
            max_consecutive_failures: 3,
            dispatch_deadline: Duration::from_secs(20),
            very_high_page_threshold: 20,
            early_page_threshold: 3,
        }
    }
}
