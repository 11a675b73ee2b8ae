use crate::modules::marketplace::{Marketplace, MarketplaceRegistry, ProductResult};
use crate::modules::search::domain::{PaginationState, PriceFilter, SearchConfig, SearchKey};
use crate::modules::search::infrastructure::{cache::SearchCache, monitoring::FailureTracker};
use crate::shared::utils::LogContext;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates one search across the selected marketplaces.
///
/// Stateless per call; reads and writes the shared cache and failure tracker.
/// Every call returns a well-formed result set plus pagination state - no
/// marketplace error, task panic, or deadline expiry escapes this service.
pub struct SearchService {
    registry: Arc<MarketplaceRegistry>,
    cache: Arc<SearchCache>,
    tracker: Arc<FailureTracker>,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(
        registry: Arc<MarketplaceRegistry>,
        cache: Arc<SearchCache>,
        tracker: Arc<FailureTracker>,
        config: SearchConfig,
    ) -> Self {
        Self {
            registry,
            cache,
            tracker,
            config,
        }
    }

    /// Fan a query out to the selected marketplaces, merge results in
    /// completion order, and classify the outcome.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        min_price: Option<f64>,
        max_price: Option<f64>,
        selection: &[Marketplace],
    ) -> (Vec<ProductResult>, PaginationState) {
        // Blank queries and empty selections short-circuit before any key is
        // built; no shared state is touched.
        if query.trim().is_empty() {
            debug!("Skipping search for blank query");
            return (Vec::new(), PaginationState::neutral());
        }

        let selected = self.registry.select(selection);
        if selected.is_empty() {
            debug!("No registered marketplaces in selection, returning neutral response");
            return (Vec::new(), PaginationState::neutral());
        }

        let price = PriceFilter::new(min_price, max_price);
        let selected_ids: Vec<Marketplace> = selected.iter().map(|(id, _)| *id).collect();
        let key = SearchKey::new(query, page, price, &selected_ids);

        if self.tracker.should_stop_pagination(&key) {
            let count = self.tracker.failure_count(&key);
            debug!(
                "Pagination exhausted for {} after {} consecutive failures",
                key.describe(),
                count
            );
            return (
                Vec::new(),
                PaginationState::exhausted(count, self.tracker.last_failure_reason(&key)),
            );
        }

        if let Some(cached) = self.cache.get(&key) {
            // A cache hit always counts as a success for this key
            self.tracker.record_success(&key);
            LogContext::search_operation(key.query(), None, Some(cached.len()));
            return (cached, PaginationState::neutral());
        }

        let merged = self.dispatch(&key, &selected).await;

        let effective_failure =
            merged.is_empty() || (page > self.config.very_high_page_threshold && price.is_active());

        if !effective_failure {
            self.tracker.record_success(&key);
            self.cache
                .set(key.clone(), merged.clone(), self.config.cache_ttl);
            LogContext::search_operation(key.query(), None, Some(merged.len()));
            return (merged, PaginationState::neutral());
        }

        let reason = self.failure_reason(page, price);
        let count = self.tracker.record_failure(&key, &reason);
        warn!(
            "Search for {} classified as failure ({}/{}): {}",
            key.describe(),
            count,
            self.config.max_consecutive_failures,
            reason
        );

        let state = if count >= self.config.max_consecutive_failures {
            PaginationState::exhausted(count, Some(reason))
        } else {
            PaginationState::failing(count, reason)
        };
        (Vec::new(), state)
    }

    /// Dispatch one worker task per selected marketplace, bounded by the
    /// aggregate deadline. Results are merged in completion order; a task
    /// still outstanding when the deadline elapses is abandoned, but results
    /// already collected are kept.
    async fn dispatch(
        &self,
        key: &SearchKey,
        selected: &[(Marketplace, Arc<dyn crate::modules::marketplace::MarketplaceClient>)],
    ) -> Vec<ProductResult> {
        let mut tasks: FuturesUnordered<_> = selected
            .iter()
            .map(|(marketplace, client)| {
                let marketplace = *marketplace;
                let client = client.clone();
                let query = key.query().to_string();
                let page = key.page();
                let min_price = key.price().min_price();
                let max_price = key.price().max_price();

                tokio::spawn(async move {
                    match client
                        .search_products(&query, page, min_price, max_price)
                        .await
                    {
                        Ok(results) => {
                            LogContext::search_operation(
                                &query,
                                Some(marketplace.as_str()),
                                Some(results.len()),
                            );
                            results
                        }
                        Err(e) => {
                            // Errors are isolated to this marketplace and
                            // contribute zero results
                            LogContext::error_with_context(
                                &e,
                                &format!("Marketplace {} search failed", marketplace),
                            );
                            Vec::new()
                        }
                    }
                })
            })
            .collect();

        let deadline = tokio::time::sleep(self.config.dispatch_deadline);
        tokio::pin!(deadline);

        let mut merged = Vec::new();
        loop {
            tokio::select! {
                _ = &mut deadline => {
                    warn!(
                        "Dispatch deadline of {:?} elapsed for {} with {} marketplace tasks outstanding",
                        self.config.dispatch_deadline,
                        key.describe(),
                        tasks.len()
                    );
                    break;
                }
                joined = tasks.next() => match joined {
                    Some(Ok(mut results)) => merged.append(&mut results),
                    Some(Err(e)) => {
                        // A panicking adapter task is treated like an adapter
                        // error: zero results, siblings unaffected
                        warn!("Marketplace search task failed: {}", e);
                    }
                    None => break,
                }
            }
        }
        merged
    }

    /// Failure-reason decision table, first match wins:
    /// filter active on an early page points at the filter bounds; deep
    /// pages report the end of results; everything else is a generic miss.
    fn failure_reason(&self, page: u32, price: PriceFilter) -> String {
        let early = self.config.early_page_threshold;
        let very_high = self.config.very_high_page_threshold;

        if price.is_active() && page <= early {
            match (price.min_price(), price.max_price()) {
                (None, Some(max)) => format!(
                    "No products found under {}. Try raising the maximum price or relaxing filters",
                    format_price(max)
                ),
                (Some(min), None) => format!(
                    "No products found above {}. Try lowering the minimum price or relaxing filters",
                    format_price(min)
                ),
                _ => "No products match the current price range. Try relaxing the filters"
                    .to_string(),
            }
        } else if price.is_active() && page > very_high {
            format!(
                "Reached the end of available results (page {}); all products matching the price filter have been shown",
                page
            )
        } else if page > early {
            if price.is_active() {
                "Reached the end of available results for the current filters".to_string()
            } else {
                "Reached the end of available results".to_string()
            }
        } else {
            "No results found from product sources".to_string()
        }
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}
