//! Ariana — conference demo bot for value-based healthcare.

pub mod channels;
pub mod config;
pub mod error;
pub mod flow;
pub mod nlu;
pub mod script;
pub mod store;

pub use error::{Error, Result};
