//! Turn phases and turn tracking

use serde::{Deserialize, Serialize};

/// The three phases of a turn, in order.
///
/// No phase is ever skipped: a player with zero actions still passes
/// through the Action phase (it just ends immediately), and Cleanup always
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Action,
    Buy,
    Cleanup,
}

impl Phase {
    /// Get the next phase in turn order
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Action => Some(Phase::Buy),
            Phase::Buy => Some(Phase::Cleanup),
            Phase::Cleanup => None, // End of turn
        }
    }
}

/// Represents the current turn structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnState {
    /// Current turn number (starts at 1)
    pub turn_number: u32,

    /// Index of the current player in the fixed roster
    pub current_player_idx: usize,

    /// Current phase
    pub phase: Phase,
}

impl TurnState {
    pub fn new() -> Self {
        TurnState {
            turn_number: 1,
            current_player_idx: 0,
            phase: Phase::Action,
        }
    }

    /// Advance to the next phase. Returns false at end of turn.
    pub fn advance_phase(&mut self) -> bool {
        if let Some(next) = self.phase.next() {
            self.phase = next;
            true
        } else {
            false
        }
    }

    /// Start the next player's turn (cyclic roster order).
    pub fn next_turn(&mut self, num_players: usize) {
        self.turn_number += 1;
        self.current_player_idx = (self.current_player_idx + 1) % num_players;
        self.phase = Phase::Action;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::new()
    }
}
