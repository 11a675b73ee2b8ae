use serde::{Deserialize, Serialize};

/// Pagination metadata returned with every search response, telling the
/// caller whether to request further pages and why not.
///
/// Produced fresh on every orchestrator call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// True when the engine has decided no further pages will yield results
    pub end_of_results: bool,
    /// Consecutive effective failures recorded for this key
    pub consecutive_failures: u32,
    /// True when the caller should stop paginating and may retry later
    pub retry_suggested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl PaginationState {
    /// State for a successful or not-yet-failing search
    pub fn neutral() -> Self {
        Self {
            end_of_results: false,
            consecutive_failures: 0,
            retry_suggested: false,
            failure_reason: None,
        }
    }

    /// State for an exhausted key: pagination should stop
    pub fn exhausted(consecutive_failures: u32, failure_reason: Option<String>) -> Self {
        Self {
            end_of_results: true,
            consecutive_failures,
            retry_suggested: true,
            failure_reason,
        }
    }

    /// State for a failure below the stop threshold
    pub fn failing(consecutive_failures: u32, failure_reason: String) -> Self {
        Self {
            end_of_results: false,
            consecutive_failures,
            retry_suggested: false,
            failure_reason: Some(failure_reason),
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::neutral()
    }
}
