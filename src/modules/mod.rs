pub mod marketplace;
pub mod search;
