//! Core channel trait and message types.

use std::pin::Pin;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::ChannelError;

/// A message received from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Which channel the message arrived on.
    pub channel: String,
    /// Channel-scoped chat identifier; replies go back here.
    pub chat_id: String,
    /// Sender's display name, when the channel provides one.
    pub user_name: Option<String>,
    /// Message text.
    pub text: String,
    /// When the message was received.
    pub received_at: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(
        channel: impl Into<String>,
        chat_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            chat_id: chat_id.into(),
            user_name: None,
            text: text.into(),
            received_at: Utc::now(),
        }
    }

    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Name to use in logs: the sender's display name, or the chat id.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.chat_id)
    }
}

/// What to do with the chat's quick-reply keyboard when sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyboardAction {
    /// Show a one-time keyboard with the given rows of buttons.
    Show(Vec<Vec<String>>),
    /// Hide any keyboard currently shown.
    Remove,
}

/// A reply to send back on the originating channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: KeyboardAction,
}

impl Reply {
    /// Plain text; hides any keyboard.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: KeyboardAction::Remove,
        }
    }

    /// Text with a single row of quick-reply buttons.
    pub fn with_buttons(text: impl Into<String>, buttons: &[&str]) -> Self {
        Self {
            text: text.into(),
            keyboard: KeyboardAction::Show(vec![
                buttons.iter().map(|b| b.to_string()).collect(),
            ]),
        }
    }
}

/// Stream of messages produced by a channel.
pub type MessageStream = Pin<Box<dyn Stream<Item = IncomingMessage> + Send>>;

/// A bidirectional message channel.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Short channel name, used in logs.
    fn name(&self) -> &str;

    /// Start the channel and return its stream of incoming messages.
    async fn start(&self) -> Result<MessageStream, ChannelError>;

    /// Send a reply to the chat `msg` arrived from.
    async fn respond(&self, msg: &IncomingMessage, reply: Reply) -> Result<(), ChannelError>;

    /// Verify the channel is reachable.
    async fn health_check(&self) -> Result<(), ChannelError>;

    /// Stop the channel.
    async fn shutdown(&self) -> Result<(), ChannelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_message_builder() {
        let msg = IncomingMessage::new("telegram", "12345", "hello");
        assert_eq!(msg.channel, "telegram");
        assert_eq!(msg.chat_id, "12345");
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.display_name(), "12345");

        let named = msg.with_user_name("Alice");
        assert_eq!(named.display_name(), "Alice");
    }

    #[test]
    fn plain_reply_removes_keyboard() {
        let reply = Reply::plain("hi");
        assert_eq!(reply.text, "hi");
        assert_eq!(reply.keyboard, KeyboardAction::Remove);
    }

    #[test]
    fn buttons_form_a_single_row() {
        let reply = Reply::with_buttons("pick one", &["Yes", "No", "Sometimes"]);
        match reply.keyboard {
            KeyboardAction::Show(rows) => {
                assert_eq!(rows, vec![vec!["Yes", "No", "Sometimes"]]);
            }
            KeyboardAction::Remove => panic!("expected a keyboard"),
        }
    }
}
