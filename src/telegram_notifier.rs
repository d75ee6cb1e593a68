use anyhow::{bail, Context};
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Minimal client for the Telegram Bot `sendMessage` method
#[derive(Clone)]
pub struct TelegramNotifier {
  client: Client,
  api_base: String,
  token: String,
  chat_id: String,
}

impl TelegramNotifier {
  pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
    Self::with_api_base(DEFAULT_API_BASE, token, chat_id)
  }

  /// Point the notifier at a different Bot API host
  pub fn with_api_base(
    api_base: impl Into<String>,
    token: impl Into<String>,
    chat_id: impl Into<String>,
  ) -> Self {
    Self {
      client: Client::new(),
      api_base: api_base.into().trim_end_matches('/').to_string(),
      token: token.into(),
      chat_id: chat_id.into(),
    }
  }

  pub fn chat_id(&self) -> &str {
    &self.chat_id
  }

  /// Send a plain-text message to the configured chat
  pub async fn send_message(&self, message: &str) -> anyhow::Result<()> {
    let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);

    let payload = serde_json::json!({
      "chat_id": self.chat_id,
      "text": message,
      "disable_web_page_preview": true
    });

    let response = self
      .client
      .post(&url)
      .json(&payload)
      .send()
      .await
      .context("Telegram request failed")?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      bail!("Telegram API error: status {}: {}", status, body);
    }

    debug!("Telegram message delivered to chat {}", self.chat_id);
    Ok(())
  }
}
