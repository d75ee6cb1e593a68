//! Small helpers shared across the crate

pub mod helper;
pub mod retry;

pub use retry::RetryPolicy;
