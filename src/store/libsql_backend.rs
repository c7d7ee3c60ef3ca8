//! libSQL backend — async `VisitorStore` trait implementation.
//!
//! Supports local file and in-memory databases.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::DatabaseError;
use crate::script::{Character, Goal, Language};
use crate::store::migrations;
use crate::store::traits::{VisitorRow, VisitorStore};

/// libSQL database backend.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlBackend {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open (or create) a local database file.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Open(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Open(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Open(format!("Failed to create connection: {e}")))?;

        info!(path = %path.display(), "Database opened");
        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| DatabaseError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Open(format!("Failed to create connection: {e}")))?;

        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    /// Get the connection.
    fn conn(&self) -> &Connection {
        &self.conn
    }
}

// ── Helper functions ────────────────────────────────────────────────

/// Parse an RFC 3339 or SQLite datetime string into DateTime<Utc>.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    // Try RFC 3339 first
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    // Try SQLite datetime() output with fractional seconds
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return ndt.and_utc();
    }
    // Try SQLite datetime() output without fractional seconds
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return ndt.and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

/// Map a libsql Row to a VisitorRow.
///
/// Column order matches VISITOR_COLUMNS:
/// 0:user_id, 1:session_id, 2:chat_id, 3:bot_goal, 4:language,
/// 5:bot_character, 6:user_email, 7:user_health_choice, 8:created_at
fn row_to_visitor(row: &libsql::Row) -> Result<VisitorRow, libsql::Error> {
    let created_str: String = row.get(8)?;

    Ok(VisitorRow {
        id: row.get(0)?,
        session_id: row.get(1)?,
        chat_id: row.get(2)?,
        bot_goal: row.get(3).ok(),
        language: row.get(4).ok(),
        bot_character: row.get(5).ok(),
        user_email: row.get(6).ok(),
        user_health_choice: row.get::<i64>(7).ok().map(|v| v != 0),
        created_at: parse_datetime(&created_str),
    })
}

// ── Trait implementation ────────────────────────────────────────────

const VISITOR_COLUMNS: &str = "user_id, session_id, chat_id, bot_goal, language, bot_character, user_email, user_health_choice, created_at";

#[async_trait]
impl VisitorStore for LibSqlBackend {
    async fn run_migrations(&self) -> Result<(), DatabaseError> {
        migrations::run_migrations(self.conn()).await
    }

    // ── Customization ───────────────────────────────────────────────

    async fn record_goal(
        &self,
        session_id: Uuid,
        chat_id: &str,
        goal: Goal,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO user_data (session_id, chat_id, bot_goal) VALUES (?1, ?2, ?3)",
                params![session_id.to_string(), chat_id, goal.as_str()],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("record_goal: {e}")))?;

        debug!(session_id = %session_id, chat_id, goal = goal.as_str(), "Goal recorded");
        Ok(())
    }

    async fn record_language(
        &self,
        session_id: Uuid,
        chat_id: &str,
        language: Language,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO user_data (session_id, chat_id, language) VALUES (?1, ?2, ?3)",
                params![session_id.to_string(), chat_id, language.as_str()],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("record_language: {e}")))?;

        debug!(session_id = %session_id, chat_id, language = language.as_str(), "Language recorded");
        Ok(())
    }

    async fn record_character(
        &self,
        session_id: Uuid,
        chat_id: &str,
        character: Character,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO user_data (session_id, chat_id, bot_character) VALUES (?1, ?2, ?3)",
                params![session_id.to_string(), chat_id, character.as_str()],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("record_character: {e}")))?;

        debug!(session_id = %session_id, chat_id, character = character.as_str(), "Character recorded");
        Ok(())
    }

    // ── Contact ─────────────────────────────────────────────────────

    async fn record_email(
        &self,
        session_id: Uuid,
        chat_id: &str,
        email: &str,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO user_data (session_id, chat_id, user_email) VALUES (?1, ?2, ?3)",
                params![session_id.to_string(), chat_id, email],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("record_email: {e}")))?;

        debug!(session_id = %session_id, chat_id, "Email recorded");
        Ok(())
    }

    async fn record_health_choice(
        &self,
        session_id: Uuid,
        chat_id: &str,
        took_offer: bool,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO user_data (session_id, chat_id, user_health_choice) VALUES (?1, ?2, ?3)",
                params![session_id.to_string(), chat_id, took_offer as i64],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("record_health_choice: {e}")))?;

        debug!(session_id = %session_id, chat_id, took_offer, "Health choice recorded");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    async fn rows_for_chat(&self, chat_id: &str) -> Result<Vec<VisitorRow>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {VISITOR_COLUMNS} FROM user_data WHERE chat_id = ?1 ORDER BY user_id ASC"
                ),
                params![chat_id],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("rows_for_chat: {e}")))?;

        let mut out = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            match row_to_visitor(&row) {
                Ok(visitor) => out.push(visitor),
                Err(e) => {
                    tracing::warn!("Skipping visitor row: {e}");
                }
            }
        }
        Ok(out)
    }
}
