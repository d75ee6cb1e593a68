use std::sync::Arc;

use slot_reporter::{
  CompositeEventHandler, ConsoleEventHandler, ReporterConfig, RetryPolicy,
  RpcSlotProvider, SlotReporter, TelegramEventHandler, TelegramNotifier,
};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_file(true)
    .with_line_number(true)
    .init();

  dotenvy::dotenv().ok();

  let config = ReporterConfig::from_env()?;

  tokio::runtime::Runtime::new()?.block_on(async move {
    info!("Initializing slot reporter v{}...", slot_reporter::VERSION);
    config.log_summary();

    let data_provider = Arc::new(RpcSlotProvider::new(
      config.rpc_url.clone(),
      RetryPolicy::with_max_attempts(config.rpc_max_attempts),
    ));
    info!("RPC client connected to {}", data_provider.url());

    let notifier =
      TelegramNotifier::new(config.telegram_token.clone(), config.chat_id.clone());

    let mut handlers = CompositeEventHandler::new();
    handlers.add_handler(Arc::new(ConsoleEventHandler::new()));
    handlers.add_handler(Arc::new(TelegramEventHandler::new(notifier)));

    let reporter = SlotReporter::new(data_provider, Arc::new(handlers))
      .with_fetch_concurrency(config.fetch_concurrency);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut reporting = tokio::spawn(async move {
      reporter
        .start_reporting(
          config.report_interval,
          config.report_on_start,
          shutdown_rx,
        )
        .await
    });

    info!("Slot reporter is running. Press Ctrl+C to stop.");

    tokio::select! {
      signal = tokio::signal::ctrl_c() => {
        signal?;
        info!("Shutting down...");
        // Receiver may already be gone if the loop exited on its own
        let _ = shutdown_tx.send(true);
        match reporting.await {
          Ok(result) => result?,
          Err(e) => error!("Reporting task failed: {}", e),
        }
      }
      finished = &mut reporting => {
        match finished {
          Ok(result) => result?,
          Err(e) => error!("Reporting task failed: {}", e),
        }
      }
    }

    info!("Slot reporter stopped");
    Ok(())
  })
}
