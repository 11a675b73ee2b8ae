pub mod logger;

pub use logger::LogContext;
