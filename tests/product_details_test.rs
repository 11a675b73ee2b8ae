mod utils;

use dealscout::modules::search::application::use_cases::GetProductDetailsUseCase;
use dealscout::{AppError, Marketplace, MarketplaceRegistry};
use std::sync::Arc;
use utils::factories::{product, FailingMarketplace, StaticMarketplace};

fn registry_with(clients: Vec<Arc<dyn dealscout::MarketplaceClient>>) -> Arc<MarketplaceRegistry> {
    let mut registry = MarketplaceRegistry::new();
    for client in clients {
        registry.register(client);
    }
    Arc::new(registry)
}

#[tokio::test]
async fn returns_product_from_the_right_marketplace() {
    let listing = product("ae-42", Marketplace::AliExpress, 12.5);
    let registry = registry_with(vec![Arc::new(StaticMarketplace::new(
        Marketplace::AliExpress,
        vec![listing.clone()],
    ))]);
    let use_case = GetProductDetailsUseCase::new(registry);

    let found = use_case
        .execute(Marketplace::AliExpress, "ae-42")
        .await
        .expect("should find listing");
    assert_eq!(found, listing);
}

#[tokio::test]
async fn missing_product_propagates_not_found() {
    let registry = registry_with(vec![Arc::new(StaticMarketplace::empty(
        Marketplace::AliExpress,
    ))]);
    let use_case = GetProductDetailsUseCase::new(registry);

    let err = use_case
        .execute(Marketplace::AliExpress, "nope")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn upstream_failure_propagates() {
    let registry = registry_with(vec![Arc::new(FailingMarketplace::new(Marketplace::Ebay))]);
    let use_case = GetProductDetailsUseCase::new(registry);

    let err = use_case.execute(Marketplace::Ebay, "any").await.unwrap_err();
    assert!(matches!(err, AppError::ExternalServiceError(_)));
}

#[tokio::test]
async fn unregistered_marketplace_is_invalid_input() {
    let registry = registry_with(vec![Arc::new(StaticMarketplace::empty(
        Marketplace::AliExpress,
    ))]);
    let use_case = GetProductDetailsUseCase::new(registry);

    let err = use_case.execute(Marketplace::Ebay, "id").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn blank_product_id_is_rejected() {
    let registry = registry_with(vec![Arc::new(StaticMarketplace::empty(
        Marketplace::AliExpress,
    ))]);
    let use_case = GetProductDetailsUseCase::new(registry);

    let err = use_case
        .execute(Marketplace::AliExpress, "  ")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
