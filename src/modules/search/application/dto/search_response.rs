use crate::modules::marketplace::ProductResult;
use crate::modules::search::domain::PaginationState;
use serde::{Deserialize, Serialize};

/// Search response: merged marketplace results plus pagination metadata.
///
/// Results keep each marketplace's own internal ordering but carry no
/// ordering guarantee across marketplaces (merge is completion-order).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<ProductResult>,
    pub pagination_state: PaginationState,
}

impl SearchResponse {
    pub fn new(results: Vec<ProductResult>, pagination_state: PaginationState) -> Self {
        Self {
            results,
            pagination_state,
        }
    }

    /// Empty response with neutral pagination state
    pub fn neutral() -> Self {
        Self::new(Vec::new(), PaginationState::neutral())
    }
}
