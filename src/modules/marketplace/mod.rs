pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access - only export what's actually used
pub use domain::{Marketplace, ProductResult};
pub use infrastructure::MarketplaceRegistry;
pub use traits::MarketplaceClient;
