pub mod failure_tracker;

pub use failure_tracker::{FailureRecord, FailureTracker};
