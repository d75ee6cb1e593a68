use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcBlockConfig, RpcTransactionConfig};
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::signature::Signature;
use solana_transaction_status::{TransactionDetails, UiTransactionEncoding};
use tracing::debug;

use crate::models::transaction::TransactionSummary;
use crate::traits::data_provider::SlotDataProvider;
use crate::utils::retry::RetryPolicy;

const COMMITMENT: CommitmentConfig = CommitmentConfig {
    commitment: CommitmentLevel::Confirmed,
};

/// RPC-based slot data provider
pub struct RpcSlotProvider {
    rpc_client: Arc<RpcClient>,
    retry_policy: RetryPolicy,
}

impl RpcSlotProvider {
    /// Create a new RPC slot provider
    pub fn new(rpc_url: String, retry_policy: RetryPolicy) -> Self {
        let client = RpcClient::new_with_commitment(rpc_url, COMMITMENT);

        Self {
            rpc_client: Arc::new(client),
            retry_policy,
        }
    }

    /// Endpoint this provider talks to
    pub fn url(&self) -> String {
        self.rpc_client.url()
    }
}

#[async_trait]
impl SlotDataProvider for RpcSlotProvider {
    async fn latest_slot(&self) -> anyhow::Result<u64> {
        let client = &self.rpc_client;
        self.retry_policy
            .retry("getSlot", move || client.get_slot_with_commitment(COMMITMENT))
            .await
            .context("getSlot failed")
    }

    async fn slot_signatures(&self, slot: u64) -> anyhow::Result<Vec<String>> {
        let client = &self.rpc_client;
        let config = RpcBlockConfig {
            encoding: None,
            transaction_details: Some(TransactionDetails::Signatures),
            rewards: Some(false),
            commitment: Some(COMMITMENT),
            max_supported_transaction_version: Some(0),
        };

        let block = self
            .retry_policy
            .retry("getBlock", move || {
                client.get_block_with_config(slot, config.clone())
            })
            .await
            .with_context(|| format!("getBlock failed for slot {}", slot))?;

        let signatures = block.signatures.unwrap_or_default();
        debug!("Slot {} lists {} signatures", slot, signatures.len());
        Ok(signatures)
    }

    async fn fetch_transaction(&self, signature: &str) -> anyhow::Result<TransactionSummary> {
        let parsed = Signature::from_str(signature)
            .with_context(|| format!("invalid signature {}", signature))?;
        let parsed = &parsed;
        let client = &self.rpc_client;
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(COMMITMENT),
            max_supported_transaction_version: Some(0),
        };

        let tx = self
            .retry_policy
            .retry("getTransaction", move || {
                client.get_transaction_with_config(parsed, config.clone())
            })
            .await
            .with_context(|| format!("getTransaction failed for {}", signature))?;

        TransactionSummary::from_encoded(signature, &tx)
    }
}
