pub mod get_product_details;
pub mod search_deals;

pub use get_product_details::GetProductDetailsUseCase;
pub use search_deals::SearchDealsUseCase;
