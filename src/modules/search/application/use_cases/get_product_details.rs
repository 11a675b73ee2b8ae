use std::sync::Arc;

use crate::modules::marketplace::{Marketplace, MarketplaceRegistry, ProductResult};
use crate::shared::errors::{AppError, AppResult};

/// Use case for fetching one product's details from a single marketplace.
///
/// This is the simple, non-paginating path: it does not touch the result
/// cache or the failure tracker, and adapter errors (`NotFound`,
/// `ExternalServiceError`) propagate to the caller.
pub struct GetProductDetailsUseCase {
    registry: Arc<MarketplaceRegistry>,
}

impl GetProductDetailsUseCase {
    pub fn new(registry: Arc<MarketplaceRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(
        &self,
        marketplace: Marketplace,
        product_id: &str,
    ) -> AppResult<ProductResult> {
        if product_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Product id cannot be empty".to_string(),
            ));
        }

        let client = self.registry.get(marketplace).ok_or_else(|| {
            AppError::InvalidInput(format!("Marketplace {} is not registered", marketplace))
        })?;

        log::debug!("Fetching product '{}' from {}", product_id, marketplace);
        client.get_product_by_id(product_id).await
    }
}
