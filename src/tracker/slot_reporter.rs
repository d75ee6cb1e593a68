//src/tracker/slot_reporter.rs
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use futures::stream::{self, StreamExt};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::classifier::classify_transaction;
use crate::models::report::SlotReport;
use crate::traits::{data_provider::SlotDataProvider, event_handler::ReportEventHandler};
use crate::utils::helper::format_signature;

/// Periodic slot classifier and reporter
pub struct SlotReporter {
    data_provider: Arc<dyn SlotDataProvider>,
    event_handler: Arc<dyn ReportEventHandler>,
    fetch_concurrency: usize,
}

impl SlotReporter {
    /// Create a new slot reporter
    pub fn new(
        data_provider: Arc<dyn SlotDataProvider>,
        event_handler: Arc<dyn ReportEventHandler>,
    ) -> Self {
        Self {
            data_provider,
            event_handler,
            fetch_concurrency: 1,
        }
    }

    /// Allow up to `concurrency` transaction fetches in flight
    pub fn with_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.fetch_concurrency = concurrency.max(1);
        self
    }

    /// Build a report for the latest confirmed slot
    ///
    /// Transactions that cannot be fetched are counted as unavailable and do
    /// not abort the report. Failures to read the slot or its signatures do.
    pub async fn collect_report(&self) -> anyhow::Result<SlotReport> {
        let slot = self
            .data_provider
            .latest_slot()
            .await
            .context("failed to fetch latest confirmed slot")?;

        let signatures = self
            .data_provider
            .slot_signatures(slot)
            .await
            .with_context(|| format!("failed to fetch signatures for slot {}", slot))?;

        let mut report = SlotReport::new(slot);
        report.signatures = signatures.len();

        let provider = &self.data_provider;
        let results: Vec<_> = stream::iter(signatures.clone())
            .map(|signature| {
                let provider = Arc::clone(provider);
                async move { provider.fetch_transaction(&signature).await }
            })
            .buffered(self.fetch_concurrency)
            .collect()
            .await;

        for (signature, result) in signatures.iter().zip(results) {
            match result {
                Ok(tx) if tx.succeeded => {
                    let category = classify_transaction(&tx);
                    debug!("{} -> {}", format_signature(signature), category);
                    report.tally.record(category);
                }
                Ok(_) => {
                    report.failed += 1;
                }
                Err(e) => {
                    warn!(
                        "Skipping transaction {}: {:#}",
                        format_signature(signature),
                        e
                    );
                    report.unavailable += 1;
                }
            }
        }

        Ok(report)
    }

    /// Run one report cycle and hand the outcome to the event handler
    pub async fn run_cycle(&self) {
        let start_time = Instant::now();

        match self.collect_report().await {
            Ok(report) => {
                info!(
                    "Slot {}: {} successful, {} failed, {} unavailable of {} transactions",
                    report.slot,
                    report.total(),
                    report.failed,
                    report.unavailable,
                    report.signatures
                );
                self.event_handler.handle_report(&report).await;
            }
            Err(e) => {
                error!("Report cycle failed: {:#}", e);
                self.event_handler.handle_error(&e).await;
            }
        }

        debug!("Report cycle completed in {:?}", start_time.elapsed());
    }

    /// Run report cycles every `period` until `shutdown` flips to true
    ///
    /// Cycles never overlap: ticks missed while a cycle is running are
    /// skipped. A cycle still running when shutdown is requested is
    /// abandoned without sending its report.
    pub async fn start_reporting(
        &self,
        period: Duration,
        report_on_start: bool,
        mut shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<()> {
        info!("Starting slot reporting with interval: {:?}", period);

        let first_tick = if report_on_start {
            tokio::time::Instant::now()
        } else {
            tokio::time::Instant::now() + period
        };
        let mut ticker = tokio::time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let stop = *shutdown.borrow();
            if stop {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {}
                changed = shutdown.changed() => {
                    // A dropped sender also means shutdown
                    if changed.is_err() {
                        break;
                    }
                    continue;
                }
            }

            let cycle = self.run_cycle();
            tokio::pin!(cycle);
            let abandoned = loop {
                tokio::select! {
                    _ = &mut cycle => break false,
                    changed = shutdown.changed() => {
                        let stop = changed.is_err() || *shutdown.borrow();
                        if stop {
                            break true;
                        }
                    }
                }
            };

            if abandoned {
                warn!("Shutdown requested during a report cycle, abandoning it");
                break;
            }
        }

        info!("Slot reporting stopped");
        Ok(())
    }
}
