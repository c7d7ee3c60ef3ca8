//! Intent classification for free-text replies.
//!
//! Quick-reply buttons cover the happy path; anything typed by hand goes
//! through an [`IntentClassifier`]. Supports:
//! - **Keyword**: deterministic keyword heuristics, no network access
//! - **Anthropic**: zero-shot labelling via rig-core
//! - **OpenAI**: zero-shot labelling via rig-core

pub mod keyword;
pub mod llm;

pub use keyword::KeywordClassifier;
pub use llm::LlmClassifier;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NluError;

/// Intent labels the classifiers can emit.
pub mod intents {
    pub const GREET: &str = "greet";
    pub const AFFIRM: &str = "affirm";
    pub const DENY: &str = "deny";
    pub const THANKS: &str = "thanks";
    pub const GOODBYE: &str = "goodbye";
    pub const SMALLTALK: &str = "smalltalk";
    pub const OUT_OF_SCOPE: &str = "out_of_scope";

    /// All labels, in the order presented to the LLM backends.
    pub const ALL: &[&str] = &[GREET, AFFIRM, DENY, THANKS, GOODBYE, SMALLTALK, OUT_OF_SCOPE];
}

/// A predicted intent with a confidence score in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub intent: String,
    pub confidence: f32,
}

/// Classifies a free-text message into one of the [`intents`] labels.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Classify a message.
    async fn predict(&self, text: &str) -> Result<Prediction, NluError>;
}

/// Supported classifier backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NluBackend {
    Keyword,
    Anthropic,
    OpenAi,
}

impl NluBackend {
    /// Parse a backend name as written in configuration.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "keyword" => Some(Self::Keyword),
            "anthropic" => Some(Self::Anthropic),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }
}

/// Configuration for creating an intent classifier.
#[derive(Debug, Clone)]
pub struct NluConfig {
    pub backend: NluBackend,
    pub api_key: Option<secrecy::SecretString>,
    pub model: Option<String>,
}

/// Create an intent classifier from configuration.
pub fn create_classifier(config: &NluConfig) -> Result<Arc<dyn IntentClassifier>, NluError> {
    match config.backend {
        NluBackend::Keyword => {
            tracing::info!("Using keyword intent classifier");
            Ok(Arc::new(KeywordClassifier::new()))
        }
        NluBackend::Anthropic => create_anthropic_classifier(config),
        NluBackend::OpenAi => create_openai_classifier(config),
    }
}

fn create_anthropic_classifier(
    config: &NluConfig,
) -> Result<Arc<dyn IntentClassifier>, NluError> {
    let api_key = config.api_key.as_ref().ok_or_else(|| NluError::MissingApiKey {
        backend: "anthropic".to_string(),
    })?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| llm::DEFAULT_ANTHROPIC_MODEL.to_string());

    let classifier = LlmClassifier::anthropic(api_key, &model)?;
    tracing::info!("Using Anthropic intent classifier (model: {})", model);
    Ok(Arc::new(classifier))
}

fn create_openai_classifier(config: &NluConfig) -> Result<Arc<dyn IntentClassifier>, NluError> {
    let api_key = config.api_key.as_ref().ok_or_else(|| NluError::MissingApiKey {
        backend: "openai".to_string(),
    })?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| llm::DEFAULT_OPENAI_MODEL.to_string());

    let classifier = LlmClassifier::openai(api_key, &model)?;
    tracing::info!("Using OpenAI intent classifier (model: {})", model);
    Ok(Arc::new(classifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_parse() {
        assert_eq!(NluBackend::parse("keyword"), Some(NluBackend::Keyword));
        assert_eq!(NluBackend::parse("anthropic"), Some(NluBackend::Anthropic));
        assert_eq!(NluBackend::parse("openai"), Some(NluBackend::OpenAi));
        assert_eq!(NluBackend::parse("snips"), None);
    }

    #[test]
    fn keyword_backend_needs_no_key() {
        let config = NluConfig {
            backend: NluBackend::Keyword,
            api_key: None,
            model: None,
        };
        let classifier = create_classifier(&config).unwrap();
        assert_eq!(classifier.name(), "keyword");
    }

    #[test]
    fn llm_backend_without_key_is_rejected() {
        let config = NluConfig {
            backend: NluBackend::Anthropic,
            api_key: None,
            model: None,
        };
        let err = create_classifier(&config).err().unwrap();
        assert!(matches!(err, NluError::MissingApiKey { .. }));
    }

    #[test]
    fn llm_backend_with_key_constructs() {
        // rig-core clients accept any string as API key at construction time.
        // The actual auth failure happens when making a request.
        let config = NluConfig {
            backend: NluBackend::OpenAi,
            api_key: Some(secrecy::SecretString::from("sk-test")),
            model: None,
        };
        let classifier = create_classifier(&config).unwrap();
        assert_eq!(classifier.name(), "openai");
    }
}
