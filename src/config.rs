use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_REPORT_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_RPC_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_FETCH_CONCURRENCY: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Runtime settings, validated once at startup
#[derive(Clone)]
pub struct ReporterConfig {
    pub rpc_url: String,
    pub telegram_token: String,
    pub chat_id: String,
    pub report_interval: Duration,
    pub rpc_max_attempts: usize,
    pub fetch_concurrency: usize,
    pub report_on_start: bool,
}

impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("rpc_url", &self.rpc_url)
            .field("telegram_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("report_interval", &self.report_interval)
            .field("rpc_max_attempts", &self.rpc_max_attempts)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .field("report_on_start", &self.report_on_start)
            .finish()
    }
}

impl ReporterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key -> value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let rpc_url = var("SOLANA_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "SOLANA_RPC_URL must start with http:// or https://".to_string(),
            ));
        }

        let telegram_token = var("TG_TOKEN")
            .ok_or_else(|| ConfigError::MissingVariable("TG_TOKEN".to_string()))?;
        let chat_id =
            var("CHAT_ID").ok_or_else(|| ConfigError::MissingVariable("CHAT_ID".to_string()))?;

        let interval_secs = parse_positive(
            "REPORT_INTERVAL_SECS",
            var("REPORT_INTERVAL_SECS"),
            DEFAULT_REPORT_INTERVAL_SECS,
        )?;
        let rpc_max_attempts = parse_positive(
            "RPC_MAX_ATTEMPTS",
            var("RPC_MAX_ATTEMPTS"),
            DEFAULT_RPC_MAX_ATTEMPTS,
        )?;
        let fetch_concurrency = parse_positive(
            "FETCH_CONCURRENCY",
            var("FETCH_CONCURRENCY"),
            DEFAULT_FETCH_CONCURRENCY,
        )?;

        let report_on_start = match var("REPORT_ON_START") {
            None => false,
            Some(v) => parse_bool(&v).ok_or_else(|| {
                ConfigError::InvalidValue(format!("REPORT_ON_START must be a boolean, got '{}'", v))
            })?,
        };

        Ok(Self {
            rpc_url,
            telegram_token,
            chat_id,
            report_interval: Duration::from_secs(interval_secs),
            rpc_max_attempts,
            fetch_concurrency,
            report_on_start,
        })
    }

    pub fn log_summary(&self) {
        info!("RPC URL: {}", self.rpc_url);
        info!("Telegram chat: {}", self.chat_id);
        info!("Report interval: {}s", self.report_interval.as_secs());
        info!("RPC max attempts: {}", self.rpc_max_attempts);
        info!("Fetch concurrency: {}", self.fetch_concurrency);
        info!("Report on start: {}", self.report_on_start);
    }
}

fn parse_positive<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let Some(raw) = value else {
        return Ok(default);
    };

    match raw.parse::<T>() {
        Ok(parsed) if parsed >= T::from(1) => Ok(parsed),
        _ => Err(ConfigError::InvalidValue(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
