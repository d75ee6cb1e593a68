//! Slot Reporter Library
//!
//! Polls a Solana RPC node for the latest confirmed slot, classifies its
//! successful transactions by invoked program and reports the breakdown
//! to a Telegram chat on a fixed interval.

// Public modules - these are the API surface
pub mod classifier;
pub mod config;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod tracker;
pub mod utils;
pub mod telegram_notifier;

// Re-export commonly used items for easier access
pub use classifier::{classify, classify_transaction};
pub use config::{ConfigError, ReporterConfig};
pub use models::{
    category::Category,
    report::{CategoryTally, SlotReport},
    transaction::TransactionSummary,
};
pub use traits::{
    data_provider::SlotDataProvider,
    event_handler::ReportEventHandler,
};
pub use providers::rpc_provider::RpcSlotProvider;
pub use handlers::{
    console::ConsoleEventHandler,
    telegram::TelegramEventHandler,
    composite::CompositeEventHandler,
};
pub use tracker::slot_reporter::SlotReporter;
pub use telegram_notifier::TelegramNotifier;
pub use utils::retry::RetryPolicy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
