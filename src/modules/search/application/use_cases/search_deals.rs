use std::sync::Arc;
use std::time::Instant;

use crate::modules::search::application::dto::{SearchRequest, SearchResponse};
use crate::modules::search::infrastructure::SearchService;
use crate::shared::errors::AppResult;

/// Use case for searching deals across marketplaces
pub struct SearchDealsUseCase {
    search_service: Arc<SearchService>,
}

impl SearchDealsUseCase {
    pub fn new(search_service: Arc<SearchService>) -> Self {
        Self { search_service }
    }

    /// Execute a deal search. Structurally malformed requests (page 0,
    /// negative or inverted price bounds) are rejected; a blank query or
    /// empty marketplace selection returns the neutral empty response.
    pub async fn execute(&self, request: SearchRequest) -> AppResult<SearchResponse> {
        let start_time = Instant::now();

        request.validate()?;

        log::info!(
            "Searching for '{}' (page {}) across {} marketplaces",
            request.query.trim(),
            request.page,
            request.marketplaces.len()
        );

        let (results, pagination_state) = self
            .search_service
            .search(
                &request.query,
                request.page,
                request.min_price,
                request.max_price,
                &request.marketplaces,
            )
            .await;

        log::info!(
            "Search completed in {}ms: {} results, end_of_results={}",
            start_time.elapsed().as_millis(),
            results.len(),
            pagination_state.end_of_results
        );

        Ok(SearchResponse::new(results, pagination_state))
    }
}
