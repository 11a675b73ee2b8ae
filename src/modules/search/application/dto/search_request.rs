use crate::modules::marketplace::Marketplace;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

fn default_page() -> u32 {
    1
}

/// Incoming search request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Marketplaces to search; an empty selection yields the neutral empty
    /// response rather than an error
    #[serde(default)]
    pub marketplaces: Vec<Marketplace>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, marketplaces: Vec<Marketplace>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            min_price: None,
            max_price: None,
            marketplaces,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    /// Reject structurally malformed requests. A blank query or empty
    /// marketplace selection is NOT an error here; those produce the neutral
    /// empty response downstream.
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::InvalidInput(
                "Page number must be at least 1".to_string(),
            ));
        }
        if let Some(min) = self.min_price {
            if min < 0.0 {
                return Err(AppError::InvalidInput(
                    "Minimum price cannot be negative".to_string(),
                ));
            }
        }
        if let Some(max) = self.max_price {
            if max < 0.0 {
                return Err(AppError::InvalidInput(
                    "Maximum price cannot be negative".to_string(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(AppError::InvalidInput(
                    "Minimum price cannot exceed maximum price".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_valid() {
        let request = SearchRequest::new("laptop stand", vec![Marketplace::AliExpress]);
        assert!(request.validate().is_ok());
        assert_eq!(request.page, 1);
    }

    #[test]
    fn zero_page_is_rejected() {
        let request = SearchRequest::new("q", vec![]).with_page(0);
        assert!(matches!(
            request.validate(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let request =
            SearchRequest::new("q", vec![]).with_price_range(Some(20.0), Some(10.0));
        assert!(matches!(
            request.validate(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let request = SearchRequest::new("q", vec![]).with_price_range(Some(-1.0), None);
        assert!(request.validate().is_err());
    }
}
