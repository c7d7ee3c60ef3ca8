//! Keyword-heuristic intent classifier.
//!
//! Scores each intent from keyword and phrase hits, then picks the best.
//! No model files, no network access, deterministic. Conference wifi is
//! unreliable enough that this is the default backend.

use async_trait::async_trait;

use crate::error::NluError;
use crate::nlu::{IntentClassifier, Prediction, intents};

/// Deterministic keyword-based classifier.
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn predict(&self, text: &str) -> Result<Prediction, NluError> {
        Ok(classify(text))
    }
}

/// Classify a message into an intent label via keyword heuristics.
///
/// Handles English and German, since those are the two languages the
/// bot speaks.
pub fn classify(text: &str) -> Prediction {
    let t = text.to_lowercase();

    let mut greet = 0.0_f32;
    let mut affirm = 0.0_f32;
    let mut deny = 0.0_f32;
    let mut thanks = 0.0_f32;
    let mut goodbye = 0.0_f32;
    let mut smalltalk = 0.0_f32;

    // ── Greeting signals ─────────────────────────────────────────────
    if has_token(&t, &["hi", "hello", "hey", "hallo", "servus", "moin"]) {
        greet += 0.6;
    }
    if contains_any(&t, &["good morning", "good afternoon", "good evening", "guten tag", "guten morgen", "guten abend"]) {
        greet += 0.5;
    }

    // ── Affirmation signals ──────────────────────────────────────────
    if has_token(&t, &["yes", "yeah", "yep", "yup", "sure", "ok", "okay", "ja", "klar", "genau", "gerne"]) {
        affirm += 0.6;
    }
    if contains_any(&t, &["of course", "sounds good", "why not", "go ahead", "auf jeden fall"]) {
        affirm += 0.4;
    }

    // ── Denial signals ───────────────────────────────────────────────
    if has_token(&t, &["no", "nope", "nah", "nein", "never"]) {
        deny += 0.6;
    }
    if contains_any(&t, &["not really", "no thanks", "rather not", "lieber nicht", "keine lust"]) {
        deny += 0.4;
    }

    // ── Thanks signals ───────────────────────────────────────────────
    if has_token(&t, &["thanks", "thx", "danke", "merci", "cheers"]) {
        thanks += 0.6;
    }
    if contains_any(&t, &["thank you", "vielen dank"]) {
        thanks += 0.6;
    }

    // ── Goodbye signals ──────────────────────────────────────────────
    if has_token(&t, &["bye", "goodbye", "ciao", "tschüss", "tschau"]) {
        goodbye += 0.6;
    }
    if contains_any(&t, &["see you", "auf wiedersehen", "bis bald", "gotta go", "have to go", "bis später"]) {
        goodbye += 0.5;
    }

    // ── Smalltalk signals ────────────────────────────────────────────
    if contains_any(&t, &[
        "how are you", "wie geht", "who are you", "wer bist du",
        "what can you do", "was kannst du", "your name", "dein name",
        "weather", "wetter", "are you a bot", "bist du ein bot",
    ]) {
        smalltalk += 0.6;
    }

    let total = greet + affirm + deny + thanks + goodbye + smalltalk;
    if total < 0.1 {
        return Prediction {
            intent: intents::OUT_OF_SCOPE.to_string(),
            confidence: 0.2,
        };
    }

    let mut best = (intents::OUT_OF_SCOPE, 0.0_f32);
    for (label, score) in [
        (intents::GREET, greet),
        (intents::AFFIRM, affirm),
        (intents::DENY, deny),
        (intents::THANKS, thanks),
        (intents::GOODBYE, goodbye),
        (intents::SMALLTALK, smalltalk),
    ] {
        if score > best.1 {
            best = (label, score);
        }
    }

    Prediction {
        intent: best.0.to_string(),
        confidence: best.1 / total,
    }
}

fn has_token(s: &str, words: &[&str]) -> bool {
    s.split(|c: char| !c.is_alphanumeric())
        .any(|tok| words.contains(&tok))
}

fn contains_any(s: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| s.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_in_both_languages() {
        assert_eq!(classify("Hello there!").intent, intents::GREET);
        assert_eq!(classify("hallo").intent, intents::GREET);
        assert_eq!(classify("Guten Morgen").intent, intents::GREET);
    }

    #[test]
    fn affirmations() {
        assert_eq!(classify("yeah sure").intent, intents::AFFIRM);
        assert_eq!(classify("klar, warum nicht").intent, intents::AFFIRM);
    }

    #[test]
    fn denials_beat_thanks_in_no_thanks() {
        let p = classify("no thanks");
        assert_eq!(p.intent, intents::DENY);
    }

    #[test]
    fn thanks_and_goodbyes() {
        assert_eq!(classify("vielen Dank!").intent, intents::THANKS);
        assert_eq!(classify("ok bye, see you").intent, intents::GOODBYE);
        assert_eq!(classify("Tschüss!").intent, intents::GOODBYE);
    }

    #[test]
    fn smalltalk_questions() {
        assert_eq!(classify("how are you doing?").intent, intents::SMALLTALK);
        assert_eq!(classify("wie geht es dir?").intent, intents::SMALLTALK);
    }

    #[test]
    fn gibberish_is_out_of_scope() {
        let p = classify("qwertzuiop asdfgh");
        assert_eq!(p.intent, intents::OUT_OF_SCOPE);
        assert!(p.confidence < 0.5);
    }

    #[test]
    fn short_words_need_token_boundaries() {
        // "piano" contains "no" but is not a denial
        assert_eq!(classify("I play piano").intent, intents::OUT_OF_SCOPE);
    }

    #[test]
    fn confidence_is_normalized() {
        let p = classify("yes");
        assert_eq!(p.intent, intents::AFFIRM);
        assert!(p.confidence > 0.9);
    }
}
