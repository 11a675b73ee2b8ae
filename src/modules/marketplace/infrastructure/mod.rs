pub mod registry;

pub use registry::MarketplaceRegistry;
