use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported product marketplaces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marketplace {
    /// AliExpress affiliate API
    #[serde(rename = "aliexpress")]
    AliExpress,
    /// eBay Browse API
    #[serde(rename = "ebay")]
    Ebay,
}

impl Marketplace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marketplace::AliExpress => "aliexpress",
            Marketplace::Ebay => "ebay",
        }
    }

    /// All marketplaces known to the engine
    pub fn all() -> Vec<Marketplace> {
        vec![Marketplace::AliExpress, Marketplace::Ebay]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
