pub mod product;

pub use product::ProductResult;
