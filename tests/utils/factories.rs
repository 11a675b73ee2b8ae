use async_trait::async_trait;
use dealscout::{AppError, AppResult, Marketplace, MarketplaceClient, ProductResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn product(id: &str, marketplace: Marketplace, price: f64) -> ProductResult {
    ProductResult::new(id, marketplace, format!("Listing {}", id), price)
}

pub fn products(marketplace: Marketplace, count: usize) -> Vec<ProductResult> {
    (0..count)
        .map(|i| product(&format!("{}-{}", marketplace, i), marketplace, 9.99))
        .collect()
}

/// Fake client returning a fixed result set; counts search calls so tests can
/// assert when the orchestrator short-circuits without dispatching.
pub struct StaticMarketplace {
    marketplace: Marketplace,
    results: Vec<ProductResult>,
    pub search_calls: AtomicUsize,
}

impl StaticMarketplace {
    pub fn new(marketplace: Marketplace, results: Vec<ProductResult>) -> Self {
        Self {
            marketplace,
            results,
            search_calls: AtomicUsize::new(0),
        }
    }

    pub fn empty(marketplace: Marketplace) -> Self {
        Self::new(marketplace, Vec::new())
    }

    pub fn call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketplaceClient for StaticMarketplace {
    fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    async fn search_products(
        &self,
        _query: &str,
        _page: u32,
        _min_price: Option<f64>,
        _max_price: Option<f64>,
    ) -> AppResult<Vec<ProductResult>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }

    async fn get_product_by_id(&self, id: &str) -> AppResult<ProductResult> {
        self.results
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }
}

/// Fake client whose search always errors at the adapter boundary
pub struct FailingMarketplace {
    marketplace: Marketplace,
    pub search_calls: AtomicUsize,
}

impl FailingMarketplace {
    pub fn new(marketplace: Marketplace) -> Self {
        Self {
            marketplace,
            search_calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketplaceClient for FailingMarketplace {
    fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    async fn search_products(
        &self,
        _query: &str,
        _page: u32,
        _min_price: Option<f64>,
        _max_price: Option<f64>,
    ) -> AppResult<Vec<ProductResult>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::ExternalServiceError(
            "connection reset by upstream".to_string(),
        ))
    }

    async fn get_product_by_id(&self, _id: &str) -> AppResult<ProductResult> {
        Err(AppError::ExternalServiceError(
            "connection reset by upstream".to_string(),
        ))
    }
}

/// Fake client that sleeps before answering, for deadline tests
pub struct SlowMarketplace {
    marketplace: Marketplace,
    delay: Duration,
    results: Vec<ProductResult>,
}

impl SlowMarketplace {
    pub fn new(marketplace: Marketplace, delay: Duration, results: Vec<ProductResult>) -> Self {
        Self {
            marketplace,
            delay,
            results,
        }
    }
}

#[async_trait]
impl MarketplaceClient for SlowMarketplace {
    fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    async fn search_products(
        &self,
        _query: &str,
        _page: u32,
        _min_price: Option<f64>,
        _max_price: Option<f64>,
    ) -> AppResult<Vec<ProductResult>> {
        tokio::time::sleep(self.delay).await;
        Ok(self.results.clone())
    }

    async fn get_product_by_id(&self, _id: &str) -> AppResult<ProductResult> {
        tokio::time::sleep(self.delay).await;
        Err(AppError::NotFound(
            "slow marketplace has no details".to_string(),
        ))
    }
}
