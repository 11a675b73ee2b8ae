pub mod search_config;
pub mod value_objects;

pub use search_config::SearchConfig;
pub use value_objects::{PaginationState, PriceFilter, SearchKey};
