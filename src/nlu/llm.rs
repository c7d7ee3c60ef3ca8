//! LLM-backed intent classifier via rig-core.
//!
//! Sends the message to a small model with a zero-shot labelling preamble
//! and parses the label out of the reply. Used when a conference booth
//! wants better coverage than the keyword heuristics give.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::{anthropic, openai};
use secrecy::{ExposeSecret, SecretString};

use crate::error::NluError;
use crate::nlu::{IntentClassifier, Prediction, intents};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

enum ProviderClient {
    Anthropic(rig::client::Client<anthropic::client::AnthropicExt>),
    OpenAi(rig::client::Client<openai::client::OpenAIResponsesExt>),
}

/// Intent classifier backed by an LLM provider.
pub struct LlmClassifier {
    client: ProviderClient,
    model: String,
}

impl LlmClassifier {
    /// Create a classifier backed by Anthropic.
    pub fn anthropic(api_key: &SecretString, model: &str) -> Result<Self, NluError> {
        let client: rig::client::Client<anthropic::client::AnthropicExt> =
            anthropic::Client::new(api_key.expose_secret()).map_err(|e| NluError::InitFailed {
                backend: "anthropic".to_string(),
                reason: format!("Failed to create Anthropic client: {}", e),
            })?;

        Ok(Self {
            client: ProviderClient::Anthropic(client),
            model: model.to_string(),
        })
    }

    /// Create a classifier backed by OpenAI.
    pub fn openai(api_key: &SecretString, model: &str) -> Result<Self, NluError> {
        let client: rig::client::Client<openai::client::OpenAIResponsesExt> =
            openai::Client::new(api_key.expose_secret()).map_err(|e| NluError::InitFailed {
                backend: "openai".to_string(),
                reason: format!("Failed to create OpenAI client: {}", e),
            })?;

        Ok(Self {
            client: ProviderClient::OpenAi(client),
            model: model.to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        match self.client {
            ProviderClient::Anthropic(_) => "anthropic",
            ProviderClient::OpenAi(_) => "openai",
        }
    }
}

#[async_trait]
impl IntentClassifier for LlmClassifier {
    fn name(&self) -> &str {
        self.backend_name()
    }

    async fn predict(&self, text: &str) -> Result<Prediction, NluError> {
        let preamble = labelling_preamble();

        let raw = match &self.client {
            ProviderClient::Anthropic(client) => {
                let agent = client
                    .agent(&self.model)
                    .preamble(&preamble)
                    .temperature(0.0)
                    .max_tokens(16)
                    .build();
                agent.prompt(text).await.map_err(|e| NluError::RequestFailed {
                    backend: "anthropic".to_string(),
                    reason: e.to_string(),
                })?
            }
            ProviderClient::OpenAi(client) => {
                let agent = client
                    .agent(&self.model)
                    .preamble(&preamble)
                    .temperature(0.0)
                    .max_tokens(16)
                    .build();
                agent.prompt(text).await.map_err(|e| NluError::RequestFailed {
                    backend: "openai".to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        Ok(parse_label(&raw))
    }
}

fn labelling_preamble() -> String {
    format!(
        "You label chat messages from conference visitors with exactly one intent. \
         The messages are in English or German. Reply with only the label, nothing else. \
         Labels: {}.",
        intents::ALL.join(", ")
    )
}

/// Parse a model reply into a prediction.
///
/// Exact label replies score high; labels buried in prose score low;
/// anything else maps to `out_of_scope`.
fn parse_label(raw: &str) -> Prediction {
    let cleaned = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`' || c == '.')
        .to_lowercase();

    if let Some(label) = intents::ALL.iter().find(|l| **l == cleaned) {
        return Prediction {
            intent: (*label).to_string(),
            confidence: 0.9,
        };
    }
    if let Some(label) = intents::ALL.iter().find(|l| cleaned.contains(**l)) {
        return Prediction {
            intent: (*label).to_string(),
            confidence: 0.5,
        };
    }
    Prediction {
        intent: intents::OUT_OF_SCOPE.to_string(),
        confidence: 0.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_label_scores_high() {
        let p = parse_label("affirm");
        assert_eq!(p.intent, intents::AFFIRM);
        assert!(p.confidence > 0.8);
    }

    #[test]
    fn quoted_and_cased_labels_still_match() {
        assert_eq!(parse_label("\"greet\"").intent, intents::GREET);
        assert_eq!(parse_label("  Deny.\n").intent, intents::DENY);
    }

    #[test]
    fn label_buried_in_prose_scores_low() {
        let p = parse_label("The intent here is smalltalk, I believe.");
        assert_eq!(p.intent, intents::SMALLTALK);
        assert!(p.confidence < 0.6);
    }

    #[test]
    fn unknown_reply_maps_to_out_of_scope() {
        let p = parse_label("I cannot classify this message.");
        assert_eq!(p.intent, intents::OUT_OF_SCOPE);
        assert!(p.confidence < 0.2);
    }

    #[test]
    fn preamble_lists_every_label() {
        let preamble = labelling_preamble();
        for label in intents::ALL {
            assert!(preamble.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn clients_construct_with_any_key() {
        // rig-core clients accept any string as API key at construction time.
        let key = SecretString::from("test-key");
        let c = LlmClassifier::anthropic(&key, DEFAULT_ANTHROPIC_MODEL).unwrap();
        assert_eq!(c.name(), "anthropic");
        let c = LlmClassifier::openai(&key, DEFAULT_OPENAI_MODEL).unwrap();
        assert_eq!(c.name(), "openai");
    }
}
