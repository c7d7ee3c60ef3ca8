//! Conversation engine — drives a visitor through the demo flow.
//!
//! One `handle()` call per incoming message: look up the chat's session,
//! dispatch on its state, persist what the visitor chose, and return the
//! replies to send. All conversation state lives in the session, so any
//! number of chats can run the demo at the same time without seeing each
//! other's selections.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::channels::{IncomingMessage, Reply};
use crate::error::Result;
use crate::flow::email::is_valid_email;
use crate::flow::session::{Session, SessionStore};
use crate::flow::state::FlowState;
use crate::nlu::IntentClassifier;
use crate::script::{self, Character, ExchangeKey, Goal, Language, LineKey, Voice};
use crate::store::VisitorStore;

const START_COMMAND: &str = "/start";
const CANCEL_COMMAND: &str = "/cancel";

/// The conversation engine. One instance serves every chat.
pub struct FlowEngine {
    store: Arc<dyn VisitorStore>,
    classifier: Arc<dyn IntentClassifier>,
    sessions: SessionStore,
}

impl FlowEngine {
    pub fn new(
        store: Arc<dyn VisitorStore>,
        classifier: Arc<dyn IntentClassifier>,
        sessions: SessionStore,
    ) -> Self {
        Self {
            store,
            classifier,
            sessions,
        }
    }

    /// Handle one incoming message, returning the replies to send back.
    pub async fn handle(&self, msg: &IncomingMessage) -> Result<Vec<Reply>> {
        if msg.text == START_COMMAND {
            return Ok(self.start_conversation(msg).await);
        }
        if msg.text == CANCEL_COMMAND {
            return Ok(self.cancel_conversation(msg).await);
        }

        let Some(mut session) = self.sessions.get(&msg.chat_id).await else {
            debug!(chat_id = %msg.chat_id, "Message outside a conversation ignored");
            return Ok(vec![]);
        };
        session.touch();
        debug!(chat_id = %msg.chat_id, state = %session.state, "Dispatching message");

        let replies = match session.state {
            FlowState::CustomizeGoal => self.customize_goal(&mut session, msg).await?,
            FlowState::CustomizeLanguage => self.customize_language(&mut session, msg).await?,
            FlowState::CustomizeCharacter => self.customize_character(&mut session, msg).await?,
            FlowState::Greet => self.greet(&mut session, msg).await?,
            FlowState::FanOfThing => self.fan_of_thing(&mut session, msg).await?,
            FlowState::DidYouKnow => self.did_you_know(&mut session, msg).await?,
            FlowState::FoundAtConf => self.found_at_conf(&mut session, msg).await?,
            FlowState::Industry => self.industry(&mut session, msg).await?,
            FlowState::Report => self.share_contact(&mut session, msg).await?,
            FlowState::ThanksBye => self.report_offer(&mut session, msg).await?,
            FlowState::Ended => {
                debug!(chat_id = %msg.chat_id, "Message after conversation end ignored");
                vec![]
            }
        };

        if session.state.is_terminal() {
            self.sessions.remove(&msg.chat_id).await;
        } else {
            self.sessions.put(session).await;
        }

        Ok(replies)
    }

    /// Snapshot of the active session for a chat, if any.
    pub async fn active_session(&self, chat_id: &str) -> Option<Session> {
        self.sessions.get(chat_id).await
    }

    /// Drop sessions idle past the timeout. Returns how many were dropped.
    pub async fn prune_idle_sessions(&self) -> usize {
        self.sessions.prune_idle().await
    }

    // ── Commands ────────────────────────────────────────────────────

    async fn start_conversation(&self, msg: &IncomingMessage) -> Vec<Reply> {
        let session = self.sessions.begin(&msg.chat_id).await;
        info!(user = msg.display_name(), session_id = %session.id, "Conversation started");
        vec![goal_prompt()]
    }

    async fn cancel_conversation(&self, msg: &IncomingMessage) -> Vec<Reply> {
        match self.sessions.remove(&msg.chat_id).await {
            Some(_) => {
                info!(user = msg.display_name(), "Conversation canceled");
                vec![Reply::plain(script::CANCEL_FAREWELL)]
            }
            None => {
                debug!(chat_id = %msg.chat_id, "Cancel outside a conversation ignored");
                vec![]
            }
        }
    }

    // ── Customization ───────────────────────────────────────────────

    async fn customize_goal(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        info!(user = msg.display_name(), answer = %msg.text, "Bot goal answered");

        let Some(goal) = Goal::parse(&msg.text) else {
            return Ok(vec![goal_prompt()]);
        };

        if let Err(e) = self
            .store
            .record_goal(session.id, &session.chat_id, goal)
            .await
        {
            warn!("Failed to record goal: {e}");
        }
        session.goal = Some(goal);
        session.transition_to(FlowState::CustomizeLanguage)?;
        Ok(vec![language_prompt()])
    }

    async fn customize_language(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        info!(user = msg.display_name(), answer = %msg.text, "Bot language answered");

        let Some(language) = Language::parse(&msg.text) else {
            return Ok(vec![language_prompt()]);
        };

        if let Err(e) = self
            .store
            .record_language(session.id, &session.chat_id, language)
            .await
        {
            warn!("Failed to record language: {e}");
        }
        session.language = Some(language);
        session.transition_to(FlowState::CustomizeCharacter)?;
        Ok(vec![character_prompt()])
    }

    async fn customize_character(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        info!(user = msg.display_name(), answer = %msg.text, "Bot character answered");

        let Some(character) = Character::parse(&msg.text) else {
            return Ok(vec![character_prompt()]);
        };

        if let Err(e) = self
            .store
            .record_character(session.id, &session.chat_id, character)
            .await
        {
            warn!("Failed to record character: {e}");
        }
        session.character = Some(character);
        session.transition_to(FlowState::Greet)?;
        Ok(vec![confirmation_prompt()])
    }

    async fn greet(&self, session: &mut Session, msg: &IncomingMessage) -> Result<Vec<Reply>> {
        if msg.text != script::CONTINUE_REPLY {
            return Ok(self.restart_customization(session, msg));
        }
        let Some(voice) = session.voice() else {
            warn!(chat_id = %msg.chat_id, "Customization incomplete at greet; restarting");
            return Ok(self.restart_customization(session, msg));
        };

        info!(
            user = msg.display_name(),
            goal = voice.goal.as_str(),
            language = voice.language.as_str(),
            character = voice.character.as_str(),
            "Showing customized bot"
        );
        session.gave_email = false;
        session.transition_to(FlowState::FanOfThing)?;
        Ok(vec![Reply::with_buttons(
            script::compose(
                voice.line(LineKey::OfferAndGreet),
                voice.line(LineKey::AskIfFan),
            ),
            voice.exchange(ExchangeKey::IfFan).replies(),
        )])
    }

    // ── Scripted exchanges ──────────────────────────────────────────

    async fn fan_of_thing(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        let Some(voice) = self.voice_or_restart(session, msg) else {
            return Ok(vec![goal_prompt()]);
        };
        info!(user = msg.display_name(), answer = %msg.text, "Fan question answered");

        let exchange = voice.exchange(ExchangeKey::IfFan);
        let Some(index) = exchange.match_reply(&msg.text) else {
            return Ok(self.free_text_detour(voice, ExchangeKey::IfFan, msg).await);
        };
        let comment = exchange.comment_at(index).unwrap_or("");

        session.transition_to(FlowState::DidYouKnow)?;
        Ok(vec![Reply::with_buttons(
            script::compose(comment, voice.line(LineKey::DidYouKnow)),
            voice.exchange(ExchangeKey::DidYouKnow).replies(),
        )])
    }

    async fn did_you_know(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        let Some(voice) = self.voice_or_restart(session, msg) else {
            return Ok(vec![goal_prompt()]);
        };
        info!(user = msg.display_name(), answer = %msg.text, "Did-you-know question answered");

        let exchange = voice.exchange(ExchangeKey::DidYouKnow);
        let Some(index) = exchange.match_reply(&msg.text) else {
            return Ok(self
                .free_text_detour(voice, ExchangeKey::DidYouKnow, msg)
                .await);
        };
        // The myth-busting line rides along with the reply comment.
        let comment = format!(
            "{}{}",
            exchange.comment_at(index).unwrap_or(""),
            voice.line(LineKey::BustMyth)
        );

        session.transition_to(FlowState::FoundAtConf)?;
        Ok(vec![Reply::with_buttons(
            script::compose(&comment, voice.line(LineKey::AskFoundAtConf)),
            voice.exchange(ExchangeKey::FoundAtConf).replies(),
        )])
    }

    async fn found_at_conf(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        let Some(voice) = self.voice_or_restart(session, msg) else {
            return Ok(vec![goal_prompt()]);
        };
        info!(user = msg.display_name(), answer = %msg.text, "Conference-find question answered");

        let exchange = voice.exchange(ExchangeKey::FoundAtConf);
        let Some(index) = exchange.match_reply(&msg.text) else {
            return Ok(self
                .free_text_detour(voice, ExchangeKey::FoundAtConf, msg)
                .await);
        };
        let comment = format!(
            "{}{}",
            exchange.comment_at(index).unwrap_or(""),
            voice.line(LineKey::ExplicitOffer)
        );

        session.transition_to(FlowState::Industry)?;
        Ok(vec![Reply::with_buttons(
            script::compose(&comment, voice.line(LineKey::AskIndustry)),
            voice.exchange(ExchangeKey::Industry).replies(),
        )])
    }

    async fn industry(&self, session: &mut Session, msg: &IncomingMessage) -> Result<Vec<Reply>> {
        let Some(voice) = self.voice_or_restart(session, msg) else {
            return Ok(vec![goal_prompt()]);
        };
        info!(user = msg.display_name(), answer = %msg.text, "Industry question answered");

        let exchange = voice.exchange(ExchangeKey::Industry);
        let Some(index) = exchange.match_reply(&msg.text) else {
            return Ok(self
                .free_text_detour(voice, ExchangeKey::Industry, msg)
                .await);
        };
        let comment = format!(
            "{}{}",
            exchange.comment_at(index).unwrap_or(""),
            voice.line(LineKey::ValueBasedHealthcare)
        );

        session.transition_to(FlowState::Report)?;
        // The share-email question takes typed answers, so the keyboard goes away.
        Ok(vec![Reply::plain(script::compose(
            &comment,
            voice.line(LineKey::AskShareEmail),
        ))])
    }

    // ── Email capture ───────────────────────────────────────────────

    async fn share_contact(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        let Some(voice) = self.voice_or_restart(session, msg) else {
            return Ok(vec![goal_prompt()]);
        };
        info!(user = msg.display_name(), "Share-email step answered");

        // Email addresses can contain 'no' or 'yes', so the consent words
        // only count when they are the whole message.
        let lower = msg.text.to_lowercase();
        if lower == "no" || lower == "nein" {
            session.transition_to(FlowState::ThanksBye)?;
            return Ok(vec![
                Reply::plain(voice.line(LineKey::HandleEmailReluctance)),
                report_prompt(voice),
            ]);
        }
        if lower == "yes" || lower == "ja" {
            return Ok(vec![Reply::plain(voice.line(LineKey::AskEnterEmail))]);
        }
        if is_valid_email(&msg.text) {
            info!(user = msg.display_name(), "Email captured");
            if let Err(e) = self
                .store
                .record_email(session.id, &session.chat_id, &msg.text)
                .await
            {
                warn!("Failed to record email: {e}");
            }
            session.gave_email = true;
            session.transition_to(FlowState::ThanksBye)?;
            return Ok(vec![
                Reply::plain(voice.line(LineKey::ThankValidEmail)),
                report_prompt(voice),
            ]);
        }
        Ok(vec![Reply::plain(voice.line(LineKey::AskRepeatEmail))])
    }

    // ── Closing ─────────────────────────────────────────────────────

    async fn report_offer(
        &self,
        session: &mut Session,
        msg: &IncomingMessage,
    ) -> Result<Vec<Reply>> {
        let Some(voice) = self.voice_or_restart(session, msg) else {
            return Ok(vec![goal_prompt()]);
        };

        let exchange = voice.exchange(ExchangeKey::Report);
        let Some(index) = exchange.match_reply(&msg.text) else {
            return Ok(self.free_text_detour(voice, ExchangeKey::Report, msg).await);
        };
        let comment = exchange.comment_at(index).unwrap_or("");

        // The first quick reply is the acceptance.
        let took_offer = index == 0;
        info!(user = msg.display_name(), took_offer, "Report offer answered");
        if let Err(e) = self
            .store
            .record_health_choice(session.id, &session.chat_id, took_offer)
            .await
        {
            warn!("Failed to record report choice: {e}");
        }

        let farewell = if session.gave_email {
            voice.line(LineKey::SayThanksByeKeepTouch)
        } else {
            voice.line(LineKey::SayThanksBye)
        };
        session.transition_to(FlowState::Ended)?;
        info!(user = msg.display_name(), "Conversation finished");
        Ok(vec![Reply::plain(script::compose(comment, farewell))])
    }

    // ── Shared paths ────────────────────────────────────────────────

    /// Free text in a scripted exchange: classify it, echo the intent back,
    /// and re-ask the pending question. The state does not move.
    async fn free_text_detour(
        &self,
        voice: Voice,
        key: ExchangeKey,
        msg: &IncomingMessage,
    ) -> Vec<Reply> {
        info!(user = msg.display_name(), text = %msg.text, "Free-text reply needs intent classification");

        let mut replies = Vec::new();
        match self.classifier.predict(&msg.text).await {
            Ok(prediction) => {
                info!(
                    intent = %prediction.intent,
                    confidence = prediction.confidence,
                    "Intent predicted"
                );
                replies.push(Reply::plain(script::intent_echo(&prediction.intent)));
            }
            Err(e) => {
                warn!("Intent classification failed: {e}");
            }
        }
        replies.push(Reply::with_buttons(
            voice.line(key.question()),
            voice.exchange(key).replies(),
        ));
        replies
    }

    /// Fetch the session's voice, or restart customization if it is
    /// somehow incomplete this deep into the flow.
    fn voice_or_restart(&self, session: &mut Session, msg: &IncomingMessage) -> Option<Voice> {
        if let Some(voice) = session.voice() {
            return Some(voice);
        }
        warn!(chat_id = %msg.chat_id, state = %session.state, "Customization missing mid-flow; restarting");
        session.restart();
        None
    }

    fn restart_customization(&self, session: &mut Session, msg: &IncomingMessage) -> Vec<Reply> {
        info!(user = msg.display_name(), "Customization restarted");
        session.restart();
        vec![goal_prompt()]
    }
}

// ── Prompts ─────────────────────────────────────────────────────────

fn goal_prompt() -> Reply {
    Reply::with_buttons(
        script::compose(script::CUSTOMIZE_PREFIX, script::ASK_GOAL),
        &Goal::ALL.map(|g| g.as_str()),
    )
}

fn language_prompt() -> Reply {
    Reply::with_buttons(
        script::compose(script::CUSTOMIZE_PREFIX, script::ASK_LANGUAGE),
        &Language::ALL.map(|l| l.as_str()),
    )
}

fn character_prompt() -> Reply {
    Reply::with_buttons(
        script::compose(script::CUSTOMIZE_PREFIX, script::ASK_CHARACTER),
        &Character::ALL.map(|c| c.as_str()),
    )
}

fn confirmation_prompt() -> Reply {
    Reply::with_buttons(
        script::compose(script::CONFIRM_COMMENT, script::CONFIRM_QUESTION),
        &[script::CONTINUE_REPLY, script::RESTART_REPLY],
    )
}

fn report_prompt(voice: Voice) -> Reply {
    Reply::with_buttons(
        voice.line(LineKey::AskReport),
        voice.exchange(ExchangeKey::Report).replies(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::channels::KeyboardAction;
    use crate::nlu::KeywordClassifier;
    use crate::store::LibSqlBackend;

    async fn test_engine() -> FlowEngine {
        let store = LibSqlBackend::new_memory().await.unwrap();
        store.run_migrations().await.unwrap();
        FlowEngine::new(
            Arc::new(store),
            Arc::new(KeywordClassifier::new()),
            SessionStore::new(Duration::from_secs(60)),
        )
    }

    fn msg(text: &str) -> IncomingMessage {
        IncomingMessage::new("cli", "chat-1", text)
    }

    #[tokio::test]
    async fn start_creates_session_and_prompts_goal() {
        let engine = test_engine().await;
        let replies = engine.handle(&msg("/start")).await.unwrap();

        assert_eq!(replies.len(), 1);
        assert_eq!(
            replies[0].text,
            "Customize me for your patients: \n\nWhat goal would you like me to have?"
        );
        assert_eq!(
            replies[0].keyboard,
            KeyboardAction::Show(vec![vec![
                "chronic".to_string(),
                "perform".to_string(),
                "mood".to_string()
            ]])
        );
        assert!(engine.active_session("chat-1").await.is_some());
    }

    #[tokio::test]
    async fn start_replaces_a_running_session() {
        let engine = test_engine().await;
        engine.handle(&msg("/start")).await.unwrap();
        let first = engine.active_session("chat-1").await.unwrap();
        engine.handle(&msg("chronic")).await.unwrap();

        engine.handle(&msg("/start")).await.unwrap();
        let second = engine.active_session("chat-1").await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.state, FlowState::CustomizeGoal);
    }

    #[tokio::test]
    async fn message_outside_a_conversation_is_ignored() {
        let engine = test_engine().await;
        let replies = engine.handle(&msg("hello?")).await.unwrap();
        assert!(replies.is_empty());
    }

    #[tokio::test]
    async fn invalid_goal_reprompts_without_advancing() {
        let engine = test_engine().await;
        engine.handle(&msg("/start")).await.unwrap();

        let replies = engine.handle(&msg("world peace")).await.unwrap();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.ends_with("What goal would you like me to have?"));
        let session = engine.active_session("chat-1").await.unwrap();
        assert_eq!(session.state, FlowState::CustomizeGoal);
        assert!(session.goal.is_none());
    }

    #[tokio::test]
    async fn cancel_ends_the_conversation() {
        let engine = test_engine().await;
        engine.handle(&msg("/start")).await.unwrap();

        let replies = engine.handle(&msg("/cancel")).await.unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(
            replies[0].text,
            "OK, thanks for dropping by, enjoy the rest of ConhIT!"
        );
        assert!(engine.active_session("chat-1").await.is_none());
    }

    #[tokio::test]
    async fn cancel_outside_a_conversation_is_silent() {
        let engine = test_engine().await;
        let replies = engine.handle(&msg("/cancel")).await.unwrap();
        assert!(replies.is_empty());
    }

    #[tokio::test]
    async fn restart_at_greet_returns_to_goal_prompt() {
        let engine = test_engine().await;
        engine.handle(&msg("/start")).await.unwrap();
        engine.handle(&msg("chronic")).await.unwrap();
        engine.handle(&msg("en_US")).await.unwrap();
        engine.handle(&msg("informal")).await.unwrap();

        let replies = engine.handle(&msg("Restart")).await.unwrap();
        assert!(replies[0].text.ends_with("What goal would you like me to have?"));
        let session = engine.active_session("chat-1").await.unwrap();
        assert_eq!(session.state, FlowState::CustomizeGoal);
        assert!(session.goal.is_none());
    }
}
