//! Runtime configuration, loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::nlu::{NluBackend, NluConfig};

/// How the Telegram channel receives updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Poll,
    Webhook,
}

/// Top-level bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot API token. Without it the bot runs on the CLI channel.
    pub telegram_token: Option<SecretString>,
    /// Poll or webhook delivery for Telegram updates.
    pub transport: TransportMode,
    /// Public HTTPS base URL, required in webhook mode.
    pub webhook_url: Option<String>,
    /// Port the webhook server binds (Heroku passes this as PORT).
    pub port: u16,
    /// Where the libSQL database file lives.
    pub db_path: PathBuf,
    /// Intent classifier selection.
    pub nlu: NluConfig,
    /// Conversations idle longer than this are pruned.
    pub session_idle_timeout: Duration,
}

impl BotConfig {
    /// Build config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Tests pass a closure over a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let telegram_token = lookup("TELEGRAM_BOT_TOKEN")
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        let transport = match lookup("ARIANA_TELEGRAM_MODE")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("poll") => TransportMode::Poll,
            Some("webhook") => TransportMode::Webhook,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "ARIANA_TELEGRAM_MODE".into(),
                    message: format!("expected poll or webhook, got {other:?}"),
                });
            }
        };

        let webhook_url = lookup("ARIANA_WEBHOOK_URL").filter(|u| !u.is_empty());
        if transport == TransportMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::MissingRequired {
                key: "ARIANA_WEBHOOK_URL".into(),
                hint: "webhook mode needs the public HTTPS base URL of this bot".into(),
            });
        }

        let port: u16 = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8443);

        let db_path = PathBuf::from(
            lookup("ARIANA_DB_PATH").unwrap_or_else(|| "./data/ariana.db".to_string()),
        );

        let nlu = nlu_from_lookup(&lookup)?;

        let session_idle_timeout = Duration::from_secs(
            lookup("ARIANA_SESSION_IDLE_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1800),
        );

        Ok(Self {
            telegram_token,
            transport,
            webhook_url,
            port,
            db_path,
            nlu,
            session_idle_timeout,
        })
    }
}

fn nlu_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<NluConfig, ConfigError> {
    let raw = lookup("ARIANA_NLU").unwrap_or_else(|| "keyword".to_string());
    let backend =
        NluBackend::parse(raw.trim().to_ascii_lowercase().as_str()).ok_or_else(|| {
            ConfigError::InvalidValue {
                key: "ARIANA_NLU".into(),
                message: format!("expected keyword, anthropic or openai, got {raw:?}"),
            }
        })?;

    let api_key = match backend {
        NluBackend::Keyword => None,
        NluBackend::Anthropic => Some(require_key(lookup, "ANTHROPIC_API_KEY")?),
        NluBackend::OpenAi => Some(require_key(lookup, "OPENAI_API_KEY")?),
    };

    Ok(NluConfig {
        backend,
        api_key,
        model: lookup("ARIANA_NLU_MODEL"),
    })
}

fn require_key(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<SecretString, ConfigError> {
    lookup(key)
        .filter(|k| !k.is_empty())
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingRequired {
            key: key.to_string(),
            hint: "required by the configured ARIANA_NLU backend".into(),
        })
}
