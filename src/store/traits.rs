//! Unified `VisitorStore` trait — single async interface for all persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DatabaseError;
use crate::script::{Character, Goal, Language};

/// One recorded conversation step.
///
/// The bot appends a fresh row per recorded choice rather than updating a
/// single visitor row, so a chat accumulates rows as the conversation runs.
#[derive(Debug, Clone)]
pub struct VisitorRow {
    pub id: i64,
    pub session_id: String,
    pub chat_id: String,
    pub bot_goal: Option<String>,
    pub language: Option<String>,
    pub bot_character: Option<String>,
    pub user_email: Option<String>,
    pub user_health_choice: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Backend-agnostic store for visitor customization and contact data.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// Run all pending schema migrations.
    async fn run_migrations(&self) -> Result<(), DatabaseError>;

    // ── Customization ───────────────────────────────────────────────

    /// Record the goal a visitor picked for the bot.
    async fn record_goal(
        &self,
        session_id: Uuid,
        chat_id: &str,
        goal: Goal,
    ) -> Result<(), DatabaseError>;

    /// Record the language a visitor picked.
    async fn record_language(
        &self,
        session_id: Uuid,
        chat_id: &str,
        language: Language,
    ) -> Result<(), DatabaseError>;

    /// Record the character a visitor picked.
    async fn record_character(
        &self,
        session_id: Uuid,
        chat_id: &str,
        character: Character,
    ) -> Result<(), DatabaseError>;

    // ── Contact ─────────────────────────────────────────────────────

    /// Record a validated email address.
    async fn record_email(
        &self,
        session_id: Uuid,
        chat_id: &str,
        email: &str,
    ) -> Result<(), DatabaseError>;

    /// Record whether the visitor accepted the report offer at the end.
    async fn record_health_choice(
        &self,
        session_id: Uuid,
        chat_id: &str,
        took_offer: bool,
    ) -> Result<(), DatabaseError>;

    // ── Queries ─────────────────────────────────────────────────────

    /// All rows recorded for a chat, oldest first.
    async fn rows_for_chat(&self, chat_id: &str) -> Result<Vec<VisitorRow>, DatabaseError>;
}
