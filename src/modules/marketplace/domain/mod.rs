pub mod entities;
pub mod value_objects;

pub use entities::ProductResult;
pub use value_objects::Marketplace;
