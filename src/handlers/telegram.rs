use async_trait::async_trait;
use tracing::{error, info};

use crate::models::report::SlotReport;
use crate::telegram_notifier::TelegramNotifier;
use crate::traits::event_handler::ReportEventHandler;
use crate::utils::helper::truncate_string;

/// Telegram messages are capped well below the API limit of 4096 characters
const MAX_ERROR_LEN: usize = 1000;

/// Telegram delivery of slot reports
pub struct TelegramEventHandler {
    notifier: TelegramNotifier,
}

impl TelegramEventHandler {
    /// Create a new Telegram event handler
    pub fn new(notifier: TelegramNotifier) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl ReportEventHandler for TelegramEventHandler {
    async fn handle_report(&self, report: &SlotReport) {
        let message = report.format_message();

        match self.notifier.send_message(&message).await {
            Ok(()) => info!(
                "Sent slot {} report to Telegram chat {}",
                report.slot,
                self.notifier.chat_id()
            ),
            Err(e) => error!(
                "Failed to send slot {} report to Telegram: {:#}",
                report.slot, e
            ),
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        let message = format!(
            "Slot report skipped: {}",
            truncate_string(&format!("{:#}", error), MAX_ERROR_LEN)
        );

        if let Err(e) = self.notifier.send_message(&message).await {
            error!("Failed to send error notice to Telegram: {:#}", e);
        }
    }
}
