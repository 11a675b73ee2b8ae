pub mod dto;
pub mod use_cases;

pub use dto::{SearchRequest, SearchResponse};
pub use use_cases::{GetProductDetailsUseCase, SearchDealsUseCase};
