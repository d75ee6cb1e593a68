use async_trait::async_trait;
use crate::models::report::SlotReport;

/// Handler for finished report cycles
#[async_trait]
pub trait ReportEventHandler: Send + Sync {
    /// Handle a completed slot report
    async fn handle_report(&self, report: &SlotReport);

    /// Handle a cycle that could not produce a report
    async fn handle_error(&self, error: &anyhow::Error);
}
