//! Per-chat conversation sessions.
//!
//! Each chat gets its own [`Session`] holding the state machine position
//! and the customization choices made so far. Nothing is global: two
//! visitors chatting at once never see each other's selections.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::FlowError;
use crate::flow::state::FlowState;
use crate::script::{Character, Goal, Language, Voice};

/// One visitor's conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique id for this demo run, recorded alongside every row the
    /// run writes.
    pub id: Uuid,
    /// Channel-scoped chat identifier.
    pub chat_id: String,
    /// Current position in the flow.
    pub state: FlowState,
    /// Goal chosen during customization.
    pub goal: Option<Goal>,
    /// Language chosen during customization.
    pub language: Option<Language>,
    /// Character chosen during customization.
    pub character: Option<Character>,
    /// Whether the visitor entered a valid email this run.
    pub gave_email: bool,
    /// When the session was created.
    pub started_at: DateTime<Utc>,
    /// Last time the visitor sent a message.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(chat_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            chat_id: chat_id.into(),
            state: FlowState::default(),
            goal: None,
            language: None,
            character: None,
            gave_email: false,
            started_at: now,
            last_activity: now,
        }
    }

    /// Drop all selections and return to the start of customization.
    /// The session keeps its id: it is still the same visitor run.
    pub fn restart(&mut self) {
        self.state = FlowState::CustomizeGoal;
        self.goal = None;
        self.language = None;
        self.character = None;
        self.gave_email = false;
    }

    /// The complete customization, once all three choices are made.
    pub fn voice(&self) -> Option<Voice> {
        Some(Voice {
            goal: self.goal?,
            language: self.language?,
            character: self.character?,
        })
    }

    /// Record visitor activity.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Move to `next`, enforcing the state machine's edges.
    pub fn transition_to(&mut self, next: FlowState) -> Result<(), FlowError> {
        if !self.state.can_transition_to(next) {
            return Err(FlowError::InvalidTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        self.state = next;
        Ok(())
    }

    fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        (now - self.last_activity)
            .to_std()
            .map(|age| age > timeout)
            .unwrap_or(false)
    }
}

/// In-memory registry of active sessions, keyed by chat id.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Start a fresh session for a chat, replacing any existing one.
    pub async fn begin(&self, chat_id: &str) -> Session {
        let session = Session::new(chat_id);
        self.sessions
            .write()
            .await
            .insert(chat_id.to_string(), session.clone());
        session
    }

    /// Get a snapshot of the session for a chat, if one is active.
    pub async fn get(&self, chat_id: &str) -> Option<Session> {
        self.sessions.read().await.get(chat_id).cloned()
    }

    /// Write a session back after mutating a snapshot.
    pub async fn put(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.chat_id.clone(), session);
    }

    /// Remove a chat's session, returning it if it existed.
    pub async fn remove(&self, chat_id: &str) -> Option<Session> {
        self.sessions.write().await.remove(chat_id)
    }

    /// Drop sessions with no activity for longer than the idle timeout.
    /// Returns how many were dropped.
    pub async fn prune_idle(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, self.idle_timeout));
        before - sessions.len()
    }

    /// Number of active sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
