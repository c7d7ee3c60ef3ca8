//! Conversation flow — sessions, state machine, and the engine that
//! walks visitors through the demo.

pub mod email;
pub mod engine;
pub mod session;
pub mod state;

pub use engine::FlowEngine;
pub use session::{Session, SessionStore};
pub use state::FlowState;
