use super::price_filter::PriceFilter;
use crate::modules::marketplace::Marketplace;

/// Composite key identifying one (query, page, price filter, marketplace set)
/// combination.
///
/// The same key value is used verbatim by the result cache and the failure
/// tracker so the two can never diverge on what "the same search" means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    query: String,
    page: u32,
    price: PriceFilter,
    marketplaces: Vec<Marketplace>,
}

impl SearchKey {
    /// Build a key from raw request parts. The query is trimmed and
    /// lowercased; the marketplace set is sorted and deduplicated.
    pub fn new(query: &str, page: u32, price: PriceFilter, marketplaces: &[Marketplace]) -> Self {
        let mut ids: Vec<Marketplace> = marketplaces.to_vec();
        ids.sort();
        ids.dedup();

        Self {
            query: query.trim().to_lowercase(),
            page,
            price,
            marketplaces: ids,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn price(&self) -> PriceFilter {
        self.price
    }

    pub fn marketplaces(&self) -> &[Marketplace] {
        &self.marketplaces
    }

    /// Human-readable form for log lines, e.g. "laptop stand|p3|-10|aliexpress+ebay".
    /// Cosmetic only; storage always keys on the struct itself.
    pub fn describe(&self) -> String {
        let markets: Vec<&str> = self.marketplaces.iter().map(|m| m.as_str()).collect();
        format!(
            "{}|p{}|{}|{}",
            self.query,
            self.page,
            self.price.describe(),
            markets.join("+")
        )
    }
}
