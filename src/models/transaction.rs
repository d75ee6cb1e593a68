use anyhow::{anyhow, bail};
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, EncodedTransaction, UiInstruction, UiMessage,
    UiParsedInstruction,
};

/// The parts of a confirmed transaction the classifier looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub signature: String,
    pub succeeded: bool,
    /// Program invoked by each top-level instruction, in instruction order
    pub program_ids: Vec<String>,
}

impl TransactionSummary {
    /// Create a new transaction summary
    pub fn new(signature: impl Into<String>, succeeded: bool, program_ids: Vec<String>) -> Self {
        Self {
            signature: signature.into(),
            succeeded,
            program_ids,
        }
    }

    /// Build a summary from a `getTransaction` response
    ///
    /// A transaction without status meta is treated as not successful.
    pub fn from_encoded(
        signature: &str,
        tx: &EncodedConfirmedTransactionWithStatusMeta,
    ) -> anyhow::Result<Self> {
        let succeeded = tx
            .transaction
            .meta
            .as_ref()
            .map(|meta| meta.err.is_none())
            .unwrap_or(false);

        let program_ids = program_ids(&tx.transaction.transaction)?;

        Ok(Self::new(signature, succeeded, program_ids))
    }
}

fn program_ids(encoded: &EncodedTransaction) -> anyhow::Result<Vec<String>> {
    match encoded {
        EncodedTransaction::Json(ui_tx) => match &ui_tx.message {
            UiMessage::Raw(raw) => raw
                .instructions
                .iter()
                .map(|ix| account_key(&raw.account_keys, ix.program_id_index))
                .collect(),
            UiMessage::Parsed(parsed) => parsed
                .instructions
                .iter()
                .map(|ix| match ix {
                    UiInstruction::Compiled(compiled) => parsed
                        .account_keys
                        .get(compiled.program_id_index as usize)
                        .map(|account| account.pubkey.clone())
                        .ok_or_else(|| missing_key(compiled.program_id_index)),
                    UiInstruction::Parsed(UiParsedInstruction::Parsed(p)) => {
                        Ok(p.program_id.clone())
                    }
                    UiInstruction::Parsed(UiParsedInstruction::PartiallyDecoded(p)) => {
                        Ok(p.program_id.clone())
                    }
                })
                .collect(),
        },
        EncodedTransaction::Accounts(_) => {
            bail!("transaction was encoded without instructions")
        }
        binary => {
            let versioned = binary
                .decode()
                .ok_or_else(|| anyhow!("failed to decode binary transaction"))?;
            let keys = versioned.message.static_account_keys();
            versioned
                .message
                .instructions()
                .iter()
                .map(|ix| {
                    keys.get(ix.program_id_index as usize)
                        .map(|key| key.to_string())
                        .ok_or_else(|| missing_key(ix.program_id_index))
                })
                .collect()
        }
    }
}

fn account_key(keys: &[String], index: u8) -> anyhow::Result<String> {
    keys.get(index as usize)
        .cloned()
        .ok_or_else(|| missing_key(index))
}

fn missing_key(index: u8) -> anyhow::Error {
    anyhow!("instruction references missing account key at index {}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAYER: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
    const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
    const STAKE_PROGRAM: &str = "Stake11111111111111111111111111111111111111";

    fn meta(err: serde_json::Value) -> serde_json::Value {
        let status = if err.is_null() {
            json!({ "Ok": null })
        } else {
            json!({ "Err": err.clone() })
        };
        json!({
            "err": err,
            "status": status,
            "fee": 5000,
            "preBalances": [1_000_000, 0, 1],
            "postBalances": [995_000, 0, 1],
            "innerInstructions": [],
            "logMessages": [],
            "preTokenBalances": [],
            "postTokenBalances": [],
            "rewards": [],
            "computeUnitsConsumed": 1200
        })
    }

    fn raw_transaction_json(meta: serde_json::Value) -> serde_json::Value {
        json!({
            "slot": 250_000_000u64,
            "blockTime": 1_700_000_000i64,
            "transaction": {
                "signatures": ["sig"],
                "message": {
                    "header": {
                        "numRequiredSignatures": 1,
                        "numReadonlySignedAccounts": 0,
                        "numReadonlyUnsignedAccounts": 2
                    },
                    "accountKeys": [PAYER, STAKE_PROGRAM, TOKEN_PROGRAM],
                    "recentBlockhash": "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N",
                    "instructions": [
                        { "programIdIndex": 1, "accounts": [0], "data": "3Bxs4h24hBtQy9rw" },
                        { "programIdIndex": 2, "accounts": [0], "data": "3Bxs4h24hBtQy9rw" }
                    ]
                }
            },
            "meta": meta
        })
    }

    fn raw_transaction(meta: serde_json::Value) -> EncodedConfirmedTransactionWithStatusMeta {
        serde_json::from_value(raw_transaction_json(meta)).expect("valid getTransaction fixture")
    }

    #[test]
    fn raw_message_maps_program_indexes_in_order() {
        let tx = raw_transaction(meta(serde_json::Value::Null));
        let summary = TransactionSummary::from_encoded("sig", &tx).unwrap();

        assert!(summary.succeeded);
        assert_eq!(summary.program_ids, vec![STAKE_PROGRAM, TOKEN_PROGRAM]);
    }

    #[test]
    fn error_status_marks_transaction_failed() {
        let tx = raw_transaction(meta(json!({ "InstructionError": [0, { "Custom": 1 }] })));
        let summary = TransactionSummary::from_encoded("sig", &tx).unwrap();

        assert!(!summary.succeeded);
        assert_eq!(summary.program_ids.len(), 2);
    }

    #[test]
    fn missing_meta_is_not_successful() {
        let tx = raw_transaction(serde_json::Value::Null);
        let summary = TransactionSummary::from_encoded("sig", &tx).unwrap();
        assert!(!summary.succeeded);
    }

    #[test]
    fn out_of_range_program_index_is_an_error() {
        let mut value = raw_transaction_json(meta(serde_json::Value::Null));
        value["transaction"]["message"]["instructions"][0]["programIdIndex"] = json!(9);
        let tx: EncodedConfirmedTransactionWithStatusMeta = serde_json::from_value(value).unwrap();

        let err = TransactionSummary::from_encoded("sig", &tx).unwrap_err();
        assert!(err.to_string().contains("index 9"));
    }
}
