use async_trait::async_trait;
use tracing::{error, info};

use crate::models::report::SlotReport;
use crate::traits::event_handler::ReportEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportEventHandler for ConsoleEventHandler {
    async fn handle_report(&self, report: &SlotReport) {
        info!("{}", "=".repeat(60));
        info!(
            "SLOT {} REPORT ({})",
            report.slot,
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );
        info!("{}", "-".repeat(60));
        for line in report.format_message().lines() {
            info!("{}", line);
        }
        info!("{}", "-".repeat(60));
        info!(
            "Signatures: {} • Failed: {} • Unavailable: {}",
            report.signatures, report.failed, report.unavailable
        );
        info!("{}", "=".repeat(60));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        error!("Slot report cycle failed: {:#}", error);
    }
}
