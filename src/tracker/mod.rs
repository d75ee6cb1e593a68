//! Poll-and-report loop

pub mod slot_reporter;

pub use slot_reporter::SlotReporter;
