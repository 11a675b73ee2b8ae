pub mod pagination_state;
pub mod price_filter;
pub mod search_key;

pub use pagination_state::PaginationState;
pub use price_filter::PriceFilter;
pub use search_key::SearchKey;
