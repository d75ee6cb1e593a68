//! Data models for slot reports

pub mod category;
pub mod report;
pub mod transaction;

// Re-export for convenience
pub use category::Category;
pub use report::{CategoryTally, SlotReport};
pub use transaction::TransactionSummary;
