//! Scripted conversation content, selected by goal, language, and character.
//!
//! Every line the bot speaks after customization is a lookup into a static
//! table: first by [`Goal`], then by line or exchange key, then by
//! [`Character`] and [`Language`]. Nothing is generated at runtime.

mod catalog;

use serde::{Deserialize, Serialize};

/// Coaching goal the bot is customized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Chronic disease prevention (the chocolate script).
    Chronic,
    /// Mental performance (the coffee script).
    Perform,
    /// Mood (the joke script).
    Mood,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Chronic, Goal::Perform, Goal::Mood];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Chronic => "chronic",
            Goal::Perform => "perform",
            Goal::Mood => "mood",
        }
    }

    /// Parse a goal from its wire spelling. Matching is exact.
    pub fn parse(text: &str) -> Option<Goal> {
        Goal::ALL.into_iter().find(|goal| goal.as_str() == text)
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language the bot speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "de_DE")]
    DeDe,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::EnUs, Language::DeDe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::EnUs => "en_US",
            Language::DeDe => "de_DE",
        }
    }

    /// Parse a language from its wire spelling. Matching is exact.
    pub fn parse(text: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.as_str() == text)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the bot addresses the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    Informal,
    Formal,
}

impl Character {
    pub const ALL: [Character; 2] = [Character::Informal, Character::Formal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Character::Informal => "informal",
            Character::Formal => "formal",
        }
    }

    /// Parse a character from its wire spelling. Matching is exact.
    pub fn parse(text: &str) -> Option<Character> {
        Character::ALL.into_iter().find(|ch| ch.as_str() == text)
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single scripted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKey {
    OfferAndGreet,
    AskIfFan,
    DidYouKnow,
    BustMyth,
    AskFoundAtConf,
    ExplicitOffer,
    AskIndustry,
    ValueBasedHealthcare,
    AskShareEmail,
    AskEnterEmail,
    AskRepeatEmail,
    ThankValidEmail,
    HandleEmailReluctance,
    AskReport,
    SayThanksByeKeepTouch,
    SayThanksBye,
}

impl LineKey {
    pub const ALL: [LineKey; 16] = [
        LineKey::OfferAndGreet,
        LineKey::AskIfFan,
        LineKey::DidYouKnow,
        LineKey::BustMyth,
        LineKey::AskFoundAtConf,
        LineKey::ExplicitOffer,
        LineKey::AskIndustry,
        LineKey::ValueBasedHealthcare,
        LineKey::AskShareEmail,
        LineKey::AskEnterEmail,
        LineKey::AskRepeatEmail,
        LineKey::ThankValidEmail,
        LineKey::HandleEmailReluctance,
        LineKey::AskReport,
        LineKey::SayThanksByeKeepTouch,
        LineKey::SayThanksBye,
    ];
}

/// A question that carries quick replies and one comment per reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeKey {
    IfFan,
    DidYouKnow,
    FoundAtConf,
    Industry,
    Report,
}

impl ExchangeKey {
    pub const ALL: [ExchangeKey; 5] = [
        ExchangeKey::IfFan,
        ExchangeKey::DidYouKnow,
        ExchangeKey::FoundAtConf,
        ExchangeKey::Industry,
        ExchangeKey::Report,
    ];

    /// The line that poses this exchange's question.
    pub fn question(self) -> LineKey {
        match self {
            ExchangeKey::IfFan => LineKey::AskIfFan,
            ExchangeKey::DidYouKnow => LineKey::DidYouKnow,
            ExchangeKey::FoundAtConf => LineKey::AskFoundAtConf,
            ExchangeKey::Industry => LineKey::AskIndustry,
            ExchangeKey::Report => LineKey::AskReport,
        }
    }
}

// ─── Script tables ──────────────────────────────────────────────────────────

/// One line in all four character/language renderings.
#[derive(Debug)]
pub struct Variants {
    pub(crate) informal_en: &'static str,
    pub(crate) informal_de: &'static str,
    pub(crate) formal_en: &'static str,
    pub(crate) formal_de: &'static str,
}

impl Variants {
    pub fn get(&self, character: Character, language: Language) -> &'static str {
        match (character, language) {
            (Character::Informal, Language::EnUs) => self.informal_en,
            (Character::Informal, Language::DeDe) => self.informal_de,
            (Character::Formal, Language::EnUs) => self.formal_en,
            (Character::Formal, Language::DeDe) => self.formal_de,
        }
    }
}

/// Quick replies for one question plus the comment answering each reply.
///
/// `replies` and `comments` are parallel: the comment at index `i` answers
/// the reply at index `i`.
#[derive(Debug)]
pub struct Exchange {
    pub(crate) replies: &'static [&'static str],
    pub(crate) comments: &'static [&'static str],
}

impl Exchange {
    /// Quick replies in keyboard order.
    pub fn replies(&self) -> &'static [&'static str] {
        self.replies
    }

    /// Index of the reply exactly matching `text`, if any. No trimming,
    /// no case folding.
    pub fn match_reply(&self, text: &str) -> Option<usize> {
        self.replies.iter().position(|reply| *reply == text)
    }

    /// Comment paired with the reply at `index`.
    pub fn comment_at(&self, index: usize) -> Option<&'static str> {
        self.comments.get(index).copied()
    }
}

/// One exchange in all four character/language renderings.
#[derive(Debug)]
pub struct ExchangeVariants {
    pub(crate) informal_en: Exchange,
    pub(crate) informal_de: Exchange,
    pub(crate) formal_en: Exchange,
    pub(crate) formal_de: Exchange,
}

impl ExchangeVariants {
    pub fn get(&self, character: Character, language: Language) -> &Exchange {
        match (character, language) {
            (Character::Informal, Language::EnUs) => &self.informal_en,
            (Character::Informal, Language::DeDe) => &self.informal_de,
            (Character::Formal, Language::EnUs) => &self.formal_en,
            (Character::Formal, Language::DeDe) => &self.formal_de,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Lines {
    pub(crate) offer_and_greet: Variants,
    pub(crate) ask_if_fan: Variants,
    pub(crate) did_you_know: Variants,
    pub(crate) bust_myth: Variants,
    pub(crate) ask_found_at_conf: Variants,
    pub(crate) explicit_offer: Variants,
    pub(crate) ask_industry: Variants,
    pub(crate) value_based_healthcare: Variants,
    pub(crate) ask_share_email: Variants,
    pub(crate) ask_enter_email: Variants,
    pub(crate) ask_repeat_email: Variants,
    pub(crate) thank_valid_email: Variants,
    pub(crate) handle_email_reluctance: Variants,
    pub(crate) ask_report: Variants,
    pub(crate) say_thanks_bye_keep_touch: Variants,
    pub(crate) say_thanks_bye: Variants,
}

#[derive(Debug)]
pub(crate) struct Exchanges {
    pub(crate) if_fan: ExchangeVariants,
    pub(crate) did_you_know: ExchangeVariants,
    pub(crate) found_at_conf: ExchangeVariants,
    pub(crate) industry: ExchangeVariants,
    pub(crate) report: ExchangeVariants,
}

/// The full script for one goal.
#[derive(Debug)]
pub struct GoalScript {
    pub(crate) lines: Lines,
    pub(crate) exchanges: Exchanges,
}

impl GoalScript {
    pub fn line(&self, key: LineKey) -> &Variants {
        match key {
            LineKey::OfferAndGreet => &self.lines.offer_and_greet,
            LineKey::AskIfFan => &self.lines.ask_if_fan,
            LineKey::DidYouKnow => &self.lines.did_you_know,
            LineKey::BustMyth => &self.lines.bust_myth,
            LineKey::AskFoundAtConf => &self.lines.ask_found_at_conf,
            LineKey::ExplicitOffer => &self.lines.explicit_offer,
            LineKey::AskIndustry => &self.lines.ask_industry,
            LineKey::ValueBasedHealthcare => &self.lines.value_based_healthcare,
            LineKey::AskShareEmail => &self.lines.ask_share_email,
            LineKey::AskEnterEmail => &self.lines.ask_enter_email,
            LineKey::AskRepeatEmail => &self.lines.ask_repeat_email,
            LineKey::ThankValidEmail => &self.lines.thank_valid_email,
            LineKey::HandleEmailReluctance => &self.lines.handle_email_reluctance,
            LineKey::AskReport => &self.lines.ask_report,
            LineKey::SayThanksByeKeepTouch => &self.lines.say_thanks_bye_keep_touch,
            LineKey::SayThanksBye => &self.lines.say_thanks_bye,
        }
    }

    pub fn exchange(&self, key: ExchangeKey) -> &ExchangeVariants {
        match key {
            ExchangeKey::IfFan => &self.exchanges.if_fan,
            ExchangeKey::DidYouKnow => &self.exchanges.did_you_know,
            ExchangeKey::FoundAtConf => &self.exchanges.found_at_conf,
            ExchangeKey::Industry => &self.exchanges.industry,
            ExchangeKey::Report => &self.exchanges.report,
        }
    }
}

/// The compiled-in script for a goal.
pub fn script(goal: Goal) -> &'static GoalScript {
    match goal {
        Goal::Chronic => &catalog::CHRONIC,
        Goal::Perform => &catalog::PERFORM,
        Goal::Mood => &catalog::MOOD,
    }
}

/// A complete customization. Together the three fields select every line
/// the bot speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub goal: Goal,
    pub language: Language,
    pub character: Character,
}

impl Voice {
    pub fn line(&self, key: LineKey) -> &'static str {
        script(self.goal).line(key).get(self.character, self.language)
    }

    pub fn exchange(&self, key: ExchangeKey) -> &'static Exchange {
        script(self.goal).exchange(key).get(self.character, self.language)
    }
}

// ─── Fixed copy ─────────────────────────────────────────────────────────────
//
// The customization prompts are English-only: they run before a language
// has been chosen. The trailing space in the prefix is part of the copy.

pub const CUSTOMIZE_PREFIX: &str = "Customize me for your patients: ";
pub const ASK_GOAL: &str = "What goal would you like me to have?";
pub const ASK_LANGUAGE: &str = "What language would you like me to speak?";
pub const ASK_CHARACTER: &str = "How would you like me to behave?";
pub const CONFIRM_COMMENT: &str = "I am now fully customized!";
pub const CONFIRM_QUESTION: &str = "Do you want to see me interact as with a patient?";
pub const CONTINUE_REPLY: &str = "Continue";
pub const RESTART_REPLY: &str = "Restart";
pub const CANCEL_FAREWELL: &str = "OK, thanks for dropping by, enjoy the rest of ConhIT!";

/// Join a comment and the following question into one message.
pub fn compose(comment: &str, question: &str) -> String {
    format!("{comment}\n\n{question}")
}

/// Echo line sent when the classifier had to guess at free text.
pub fn intent_echo(intent: &str) -> String {
    format!("is this your intent: {intent}?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_parse_roundtrip() {
        for goal in Goal::ALL {
            assert_eq!(Goal::parse(goal.as_str()), Some(goal));
        }
        assert_eq!(Goal::parse("fitness"), None);
        assert_eq!(Goal::parse("Chronic"), None);
        assert_eq!(Goal::parse(""), None);
    }

    #[test]
    fn language_parse_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.as_str()), Some(language));
        }
        assert_eq!(Language::parse("en_us"), None);
        assert_eq!(Language::parse("fr_FR"), None);
    }

    #[test]
    fn character_parse_roundtrip() {
        for character in Character::ALL {
            assert_eq!(Character::parse(character.as_str()), Some(character));
        }
        assert_eq!(Character::parse("INFORMAL"), None);
    }

    #[test]
    fn display_matches_serde() {
        for goal in Goal::ALL {
            let json = serde_json::to_string(&goal).unwrap();
            assert_eq!(json, format!("\"{goal}\""));
        }
        for language in Language::ALL {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{language}\""));
        }
        for character in Character::ALL {
            let json = serde_json::to_string(&character).unwrap();
            assert_eq!(json, format!("\"{character}\""));
        }
    }

    #[test]
    fn every_line_is_nonempty() {
        for goal in Goal::ALL {
            for key in LineKey::ALL {
                for character in Character::ALL {
                    for language in Language::ALL {
                        let line = script(goal).line(key).get(character, language);
                        assert!(
                            !line.is_empty(),
                            "empty line for {goal}/{key:?}/{character}/{language}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn every_exchange_pairs_comments_with_replies() {
        for goal in Goal::ALL {
            for key in ExchangeKey::ALL {
                for character in Character::ALL {
                    for language in Language::ALL {
                        let exchange = script(goal).exchange(key).get(character, language);
                        assert_eq!(
                            exchange.replies().len(),
                            exchange.comments.len(),
                            "mismatch for {goal}/{key:?}/{character}/{language}"
                        );
                        assert!(!exchange.replies().is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn industry_exchange_has_six_options() {
        for goal in Goal::ALL {
            for character in Character::ALL {
                for language in Language::ALL {
                    let exchange = script(goal)
                        .exchange(ExchangeKey::Industry)
                        .get(character, language);
                    assert_eq!(exchange.replies().len(), 6);
                }
            }
        }
    }

    #[test]
    fn match_reply_is_exact() {
        let voice = Voice {
            goal: Goal::Chronic,
            language: Language::EnUs,
            character: Character::Informal,
        };
        let exchange = voice.exchange(ExchangeKey::IfFan);
        assert_eq!(exchange.match_reply("Yes"), Some(0));
        assert_eq!(exchange.match_reply("No"), Some(1));
        assert_eq!(exchange.match_reply("Sometimes"), Some(2));
        assert_eq!(exchange.match_reply("yes"), None);
        assert_eq!(exchange.match_reply(" Yes"), None);
    }

    #[test]
    fn voice_selects_language_and_character() {
        let informal_de = Voice {
            goal: Goal::Chronic,
            language: Language::DeDe,
            character: Character::Informal,
        };
        assert_eq!(informal_de.line(LineKey::AskIfFan), "Magst Du Schokolade?");

        let formal_de = Voice {
            character: Character::Formal,
            ..informal_de
        };
        assert_eq!(formal_de.line(LineKey::AskIfFan), "Mögen Sie Schokolade denn?");
    }

    #[test]
    fn exchange_question_mapping() {
        assert_eq!(ExchangeKey::IfFan.question(), LineKey::AskIfFan);
        assert_eq!(ExchangeKey::DidYouKnow.question(), LineKey::DidYouKnow);
        assert_eq!(ExchangeKey::FoundAtConf.question(), LineKey::AskFoundAtConf);
        assert_eq!(ExchangeKey::Industry.question(), LineKey::AskIndustry);
        assert_eq!(ExchangeKey::Report.question(), LineKey::AskReport);
    }

    #[test]
    fn compose_joins_with_blank_line() {
        assert_eq!(compose("Well... ", "Next question?"), "Well... \n\nNext question?");
    }

    #[test]
    fn intent_echo_format() {
        assert_eq!(intent_echo("greet"), "is this your intent: greet?");
    }
}
