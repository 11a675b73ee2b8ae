use serde::{Deserialize, Serialize};

/// Price-range descriptor used inside the composite search key.
///
/// Bounds are stored in integer cents so the filter derives `Eq`/`Hash` and
/// can key the cache and the failure tracker directly. Filters that differ
/// only below a cent deliberately share cache and failure state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct PriceFilter {
    min_cents: Option<u64>,
    max_cents: Option<u64>,
}

impl PriceFilter {
    pub fn new(min_price: Option<f64>, max_price: Option<f64>) -> Self {
        Self {
            min_cents: min_price.map(to_cents),
            max_cents: max_price.map(to_cents),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// True when at least one bound is set
    pub fn is_active(&self) -> bool {
        self.min_cents.is_some() || self.max_cents.is_some()
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_cents.map(from_cents)
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_cents.map(from_cents)
    }

    /// Compact form for log lines and key descriptions, e.g. "1.50-20"
    pub fn describe(&self) -> String {
        match (self.min_cents, self.max_cents) {
            (None, None) => "any".to_string(),
            (Some(min), None) => format!("{}-", format_cents(min)),
            (None, Some(max)) => format!("-{}", format_cents(max)),
            (Some(min), Some(max)) => format!("{}-{}", format_cents(min), format_cents(max)),
        }
    }
}

fn to_cents(price: f64) -> u64 {
    (price.max(0.0) * 100.0).round() as u64
}

fn from_cents(cents: u64) -> f64 {
    cents as f64 / 100.0
}

fn format_cents(cents: u64) -> String {
    if cents % 100 == 0 {
        format!("{}", cents / 100)
    } else {
        format!("{:.2}", from_cents(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_when_no_bounds() {
        assert!(!PriceFilter::none().is_active());
        assert!(PriceFilter::new(Some(1.0), None).is_active());
        assert!(PriceFilter::new(None, Some(10.0)).is_active());
    }

    #[test]
    fn bounds_round_trip_through_cents() {
        let filter = PriceFilter::new(Some(1.009), Some(19.99));
        assert_eq!(filter.min_price(), Some(1.01));
        assert_eq!(filter.max_price(), Some(19.99));
    }

    #[test]
    fn equal_filters_hash_identically() {
        let a = PriceFilter::new(Some(5.0), Some(10.0));
        let b = PriceFilter::new(Some(5.001), Some(10.0));
        assert_eq!(a, b);
    }

    #[test]
    fn describe_formats() {
        assert_eq!(PriceFilter::none().describe(), "any");
        assert_eq!(PriceFilter::new(None, Some(10.0)).describe(), "-10");
        assert_eq!(PriceFilter::new(Some(1.5), Some(20.0)).describe(), "1.50-20");
    }
}
