use super::super::value_objects::Marketplace;
use serde::{Deserialize, Serialize};

/// A single product listing as returned by a marketplace adapter.
///
/// The search engine treats this as an opaque payload: it counts and
/// concatenates results but never interprets listing fields beyond that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResult {
    /// Marketplace-scoped product identifier
    pub id: String,
    /// Which marketplace this listing came from
    pub marketplace: Marketplace,
    pub title: String,
    /// Current price in the listing currency
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Units sold, when the marketplace reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<u32>,
}

impl ProductResult {
    pub fn new(id: impl Into<String>, marketplace: Marketplace, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            marketplace,
            title: title.into(),
            price,
            original_price: None,
            currency: "USD".to_string(),
            product_url: None,
            image_url: None,
            rating: None,
            orders: None,
        }
    }

    /// Discount percentage against the original price, when known
    pub fn discount_percent(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original > self.price && original > 0.0 {
                Some(((original - self.price) / original) * 100.0)
            } else {
                None
            }
        })
    }
}
