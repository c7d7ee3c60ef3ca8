//! Telegram channel — receives updates via long-polling or a webhook.
//!
//! Native Rust Bot API implementation over reqwest. Quick replies are
//! rendered as one-time reply keyboards; free-text prompts remove the
//! keyboard again so the visitor gets a plain input field.

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;

use crate::channels::{Channel, IncomingMessage, KeyboardAction, MessageStream, Reply};
use crate::error::ChannelError;

/// Maximum message length for Telegram's sendMessage API.
const TELEGRAM_MAX_MESSAGE_LENGTH: usize = 4096;

/// How updates reach the bot.
#[derive(Debug, Clone)]
pub enum TelegramMode {
    /// Long-poll getUpdates. Needs no public endpoint.
    Poll,
    /// Have Telegram push updates to `{public_url}/{token}`.
    Webhook { public_url: String, port: u16 },
}

/// Telegram channel — connects to the Bot API via polling or webhook.
pub struct TelegramChannel {
    token: SecretString,
    mode: TelegramMode,
    client: reqwest::Client,
}

impl TelegramChannel {
    pub fn new(token: SecretString, mode: TelegramMode) -> Self {
        Self {
            token,
            mode,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "https://api.telegram.org/bot{}/{method}",
            self.token.expose_secret()
        )
    }

    /// Send a single sendMessage payload (text already within the limit).
    async fn send_chunk(&self, body: &serde_json::Value) -> Result<(), ChannelError> {
        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .json(body)
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: "telegram".into(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err = resp.text().await.unwrap_or_default();
            return Err(ChannelError::SendFailed {
                name: "telegram".into(),
                reason: format!("sendMessage returned {status}: {err}"),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<MessageStream, ChannelError> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        match &self.mode {
            TelegramMode::Poll => {
                let url = self.api_url("getUpdates");
                let client = self.client.clone();

                tokio::spawn(async move {
                    let mut offset: i64 = 0;

                    tracing::info!("Telegram channel listening for messages...");

                    loop {
                        let body = serde_json::json!({
                            "offset": offset,
                            "timeout": 30,
                            "allowed_updates": ["message"]
                        });

                        let resp = match client.post(&url).json(&body).send().await {
                            Ok(r) => r,
                            Err(e) => {
                                tracing::warn!("Telegram poll error: {e}");
                                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                                continue;
                            }
                        };

                        let data: serde_json::Value = match resp.json().await {
                            Ok(d) => d,
                            Err(e) => {
                                tracing::warn!("Telegram parse error: {e}");
                                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                                continue;
                            }
                        };

                        if let Some(results) =
                            data.get("result").and_then(serde_json::Value::as_array)
                        {
                            for update in results {
                                // Advance offset past this update
                                if let Some(uid) =
                                    update.get("update_id").and_then(serde_json::Value::as_i64)
                                {
                                    offset = uid + 1;
                                }

                                let Some(incoming) = message_from_update(update) else {
                                    continue;
                                };

                                if tx.send(incoming).is_err() {
                                    tracing::info!("Telegram listener channel closed");
                                    return;
                                }
                            }
                        }
                    }
                });
            }

            TelegramMode::Webhook { public_url, port } => {
                // Telegram's recommended guard against spoofed updates:
                // the path is the bot token, which only Telegram knows.
                let path = format!("/{}", self.token.expose_secret());
                let webhook_url = format!("{}{}", public_url.trim_end_matches('/'), path);

                let resp = self
                    .client
                    .post(self.api_url("setWebhook"))
                    .json(&serde_json::json!({
                        "url": webhook_url,
                        "allowed_updates": ["message"]
                    }))
                    .send()
                    .await
                    .map_err(|e| ChannelError::StartupFailed {
                        name: "telegram".into(),
                        reason: format!("setWebhook failed: {e}"),
                    })?;

                if !resp.status().is_success() {
                    return Err(ChannelError::StartupFailed {
                        name: "telegram".into(),
                        reason: format!("setWebhook returned {}", resp.status()),
                    });
                }

                let app = Router::new()
                    .route(&path, post(webhook_update))
                    .with_state(tx);

                let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
                    .await
                    .map_err(|e| ChannelError::StartupFailed {
                        name: "telegram".into(),
                        reason: format!("failed to bind port {port}: {e}"),
                    })?;

                tracing::info!(port, "Telegram channel listening for webhook updates");

                tokio::spawn(async move {
                    axum::serve(listener, app).await.ok();
                });
            }
        }

        let stream = futures::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|msg| (msg, rx))
        });

        Ok(Box::pin(stream))
    }

    async fn respond(&self, msg: &IncomingMessage, reply: Reply) -> Result<(), ChannelError> {
        let chunks = split_message(&reply.text, TELEGRAM_MAX_MESSAGE_LENGTH);
        let last = chunks.len() - 1;

        for (i, chunk) in chunks.iter().enumerate() {
            let mut body = serde_json::json!({
                "chat_id": chat_id_value(&msg.chat_id),
                "text": chunk,
            });
            // The keyboard rides on the final chunk, under the last
            // message the visitor sees.
            if i == last {
                body["reply_markup"] = keyboard_json(&reply.keyboard);
            }
            self.send_chunk(&body).await?;
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<(), ChannelError> {
        let resp = self
            .client
            .get(self.api_url("getMe"))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Telegram getMe failed: {e}");
                ChannelError::HealthCheckFailed {
                    name: "telegram".into(),
                }
            })?;

        if resp.status().is_success() {
            Ok(())
        } else {
            tracing::warn!(status = ?resp.status(), "Telegram getMe returned an error");
            Err(ChannelError::HealthCheckFailed {
                name: "telegram".into(),
            })
        }
    }

    async fn shutdown(&self) -> Result<(), ChannelError> {
        if matches!(self.mode, TelegramMode::Webhook { .. }) {
            let _ = self.client.post(self.api_url("deleteWebhook")).send().await;
        }
        tracing::info!("Telegram channel shutting down");
        Ok(())
    }
}

/// Axum handler for pushed updates. Telegram retries non-200 responses,
/// so unusable updates still get a 200.
async fn webhook_update(
    State(tx): State<mpsc::UnboundedSender<IncomingMessage>>,
    Json(update): Json<serde_json::Value>,
) -> StatusCode {
    if let Some(incoming) = message_from_update(&update) {
        if tx.send(incoming).is_err() {
            tracing::warn!("Telegram webhook receiver dropped");
        }
    }
    StatusCode::OK
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Extract an IncomingMessage from a Telegram update, if it carries text.
/// Stickers, photos, joins and other non-text updates yield None.
fn message_from_update(update: &serde_json::Value) -> Option<IncomingMessage> {
    let message = update.get("message")?;
    let text = message.get("text").and_then(serde_json::Value::as_str)?;
    let chat_id = message
        .get("chat")
        .and_then(|c| c.get("id"))
        .and_then(serde_json::Value::as_i64)?
        .to_string();

    let mut incoming = IncomingMessage::new("telegram", chat_id, text);
    if let Some(first_name) = message
        .get("from")
        .and_then(|f| f.get("first_name"))
        .and_then(|n| n.as_str())
    {
        incoming = incoming.with_user_name(first_name);
    }

    Some(incoming)
}

/// Telegram takes numeric chat ids as numbers; anything else goes as-is.
fn chat_id_value(chat_id: &str) -> serde_json::Value {
    match chat_id.parse::<i64>() {
        Ok(id) => serde_json::Value::from(id),
        Err(_) => serde_json::Value::from(chat_id),
    }
}

/// Render a KeyboardAction as a sendMessage reply_markup payload.
fn keyboard_json(keyboard: &KeyboardAction) -> serde_json::Value {
    match keyboard {
        KeyboardAction::Show(rows) => serde_json::json!({
            "keyboard": rows,
            "one_time_keyboard": true,
        }),
        KeyboardAction::Remove => serde_json::json!({
            "remove_keyboard": true,
        }),
    }
}

/// Split a message into chunks that fit Telegram's character limit.
/// Tries to split on newlines, then spaces, then hard-cuts.
fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if remaining.len() <= max_len {
            chunks.push(remaining.to_string());
            break;
        }

        // Find a good split point
        let chunk = &remaining[..max_len];
        let split_at = chunk
            .rfind('\n')
            .or_else(|| chunk.rfind(' '))
            .unwrap_or(max_len);

        // Don't split at position 0 (infinite loop guard)
        let split_at = if split_at == 0 { max_len } else { split_at };

        chunks.push(remaining[..split_at].to_string());
        remaining = remaining[split_at..].trim_start();
    }

    chunks
}

// ── Tests ───────────────────────────────────────────────────────────
