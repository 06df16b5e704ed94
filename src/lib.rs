//! Dominion core engine
//!
//! Rules core for a multiplayer deck-building card game: the turn/phase
//! state machine, the card-effect resolution engine, and the supply-pile
//! manager. Text I/O lives outside this crate; player decisions come in
//! through the `DecisionProvider` trait and state goes back out through
//! read-only views and the end-of-match report.

pub mod core;
pub mod error;
pub mod game;
pub mod pile;
pub mod supply;

pub use error::{EngineError, Result};
