use async_trait::async_trait;

use crate::models::transaction::TransactionSummary;

/// Source of slot and transaction data
#[async_trait]
pub trait SlotDataProvider: Send + Sync {
    /// Latest confirmed slot
    async fn latest_slot(&self) -> anyhow::Result<u64>;

    /// Signatures of the transactions confirmed in `slot`, in block order
    async fn slot_signatures(&self, slot: u64) -> anyhow::Result<Vec<String>>;

    /// Fetch one confirmed transaction by signature
    async fn fetch_transaction(&self, signature: &str) -> anyhow::Result<TransactionSummary>;
}
