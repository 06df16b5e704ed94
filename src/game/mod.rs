//! Game state, turn engine, and decision providers

pub mod controller;
pub mod effects;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod phase;
pub mod random_controller;
pub mod reaction;
pub mod scripted_controller;
pub mod state;

pub use controller::{ChoiceKind, Decision, DecisionProvider, GameStateView};
pub use game_loop::{GameEndReason, GameLoop, GameReport, PlayerScore};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use phase::{Phase, TurnState};
pub use random_controller::RandomController;
pub use scripted_controller::ScriptedController;
pub use state::GameState;
