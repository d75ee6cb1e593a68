//! Core traits for the slot reporter

pub mod data_provider;
pub mod event_handler;

// Re-export for convenience
pub use data_provider::SlotDataProvider;
pub use event_handler::ReportEventHandler;
