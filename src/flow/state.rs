//! Conversation state machine — tracks where a visitor is in the demo flow.

use serde::{Deserialize, Serialize};

/// The states of the demo conversation.
///
/// Progresses linearly: CustomizeGoal → CustomizeLanguage →
/// CustomizeCharacter → Greet → FanOfThing → DidYouKnow → FoundAtConf →
/// Industry → Report → ThanksBye → Ended. Two detours exist: Greet may
/// loop back to CustomizeGoal (restart), and any live state may jump to
/// Ended (cancel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    CustomizeGoal,
    CustomizeLanguage,
    CustomizeCharacter,
    Greet,
    FanOfThing,
    DidYouKnow,
    FoundAtConf,
    Industry,
    Report,
    ThanksBye,
    Ended,
}

impl FlowState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: FlowState) -> bool {
        use FlowState::*;
        // Cancel is allowed from any live state.
        if target == Ended {
            return !self.is_terminal();
        }
        matches!(
            (self, target),
            (CustomizeGoal, CustomizeLanguage)
                | (CustomizeLanguage, CustomizeCharacter)
                | (CustomizeCharacter, Greet)
                | (Greet, FanOfThing)
                | (Greet, CustomizeGoal)
                | (FanOfThing, DidYouKnow)
                | (DidYouKnow, FoundAtConf)
                | (FoundAtConf, Industry)
                | (Industry, Report)
                | (Report, ThanksBye)
        )
    }

    /// Whether this state is terminal (the conversation is over).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Get the next state in the linear progression, if any.
    pub fn next(&self) -> Option<FlowState> {
        use FlowState::*;
        match self {
            CustomizeGoal => Some(CustomizeLanguage),
            CustomizeLanguage => Some(CustomizeCharacter),
            CustomizeCharacter => Some(Greet),
            Greet => Some(FanOfThing),
            FanOfThing => Some(DidYouKnow),
            DidYouKnow => Some(FoundAtConf),
            FoundAtConf => Some(Industry),
            Industry => Some(Report),
            Report => Some(ThanksBye),
            ThanksBye => Some(Ended),
            Ended => None,
        }
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::CustomizeGoal
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CustomizeGoal => "customize_goal",
            Self::CustomizeLanguage => "customize_language",
            Self::CustomizeCharacter => "customize_character",
            Self::Greet => "greet",
            Self::FanOfThing => "fan_of_thing",
            Self::DidYouKnow => "did_you_know",
            Self::FoundAtConf => "found_at_conf",
            Self::Industry => "industry",
            Self::Report => "report",
            Self::ThanksBye => "thanks_bye",
            Self::Ended => "ended",
        };
        write!(f, "{s}")
    }
}
