//! Error types for the Dominion engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid kingdom setup: {0}")]
    InvalidKingdom(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Player index out of range: {0}")]
    PlayerNotFound(usize),

    #[error("Unknown card name: {0}")]
    UnknownCard(String),

    #[error("Invalid game action: {0}")]
    InvalidAction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
