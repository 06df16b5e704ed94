//! Core game types: cards and players

pub mod card;
pub mod player;
pub mod types;

pub use card::{Card, CardType};
pub use player::Player;
pub use types::PlayerName;
