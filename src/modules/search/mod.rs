pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access - only export what's actually used
pub use application::{SearchDealsUseCase, SearchRequest, SearchResponse};
pub use domain::{PaginationState, PriceFilter, SearchConfig, SearchKey};
pub use infrastructure::{FailureTracker, SearchCache, SearchService};
