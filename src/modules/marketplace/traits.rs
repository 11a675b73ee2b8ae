use crate::modules::marketplace::{Marketplace, ProductResult};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Capability implemented by each marketplace integration.
///
/// Concrete clients (AliExpress, eBay) live outside this crate; the search
/// engine only ever talks to this trait. Implementations enforce their own
/// network-level connect/read timeouts, independent of the engine's
/// aggregate dispatch deadline.
#[async_trait]
pub trait MarketplaceClient: Send + Sync {
    /// Get the marketplace this client handles
    fn marketplace(&self) -> Marketplace;

    /// Search product listings for a query and page, optionally bounded by a
    /// price range. Errors returned here are caught at the orchestrator
    /// boundary and contribute zero results; they never abort sibling
    /// marketplaces.
    async fn search_products(
        &self,
        query: &str,
        page: u32,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> AppResult<Vec<ProductResult>>;

    /// Fetch a single product by its marketplace-scoped id.
    /// Fails with `AppError::NotFound` when the listing does not exist and
    /// `AppError::ExternalServiceError` on upstream failures.
    async fn get_product_by_id(&self, id: &str) -> AppResult<ProductResult>;
}
