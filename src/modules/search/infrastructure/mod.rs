pub mod cache;
pub mod monitoring;
pub mod service;

pub use cache::SearchCache;
pub use monitoring::FailureTracker;
pub use service::SearchService;
