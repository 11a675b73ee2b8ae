pub mod modules;
pub mod shared;

pub use modules::marketplace::{Marketplace, MarketplaceClient, MarketplaceRegistry, ProductResult};
pub use modules::search::{
    FailureTracker, PaginationState, PriceFilter, SearchCache, SearchConfig, SearchDealsUseCase,
    SearchKey, SearchRequest, SearchResponse, SearchService,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;
