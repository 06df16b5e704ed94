//! Main game state structure

use crate::core::{Player, PlayerName};
use crate::error::{EngineError, Result};
use crate::game::logger::GameLogger;
use crate::game::phase::TurnState;
use crate::pile::Pile;
use crate::supply::Supply;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// Complete game state
///
/// Holds the fixed player roster (construction order defines turn order),
/// the shared supply, the shared trash pile, and the turn tracker. Cards
/// are conserved: they only ever move between the players' piles, the
/// supply, and the trash.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// All players, in fixed turn order (roster size >= 2)
    pub players: Vec<Player>,

    /// The shared supply
    pub supply: Supply,

    /// Permanently removed cards
    pub trash: Pile,

    /// Turn tracking (number, current player, phase)
    pub turn: TurnState,

    /// Random number generator for deck shuffles (seedable for
    /// deterministic matches).
    ///
    /// Wrapped in RefCell for interior mutability - draws need the RNG
    /// while a player is mutably borrowed, and the two live in disjoint
    /// fields.
    pub rng: RefCell<ChaCha12Rng>,

    /// Centralized logger for game events
    #[serde(skip)]
    pub logger: GameLogger,
}

impl GameState {
    /// Create a new match from a roster of names and the chosen kingdom
    /// piles.
    ///
    /// Decks start unshuffled and hands undealt; call
    /// [`deal_opening_hands`](Self::deal_opening_hands) (after seeding
    /// the RNG) to finish setup. `GameLoop::run_game` does this.
    pub fn new(names: Vec<PlayerName>, kingdom: Vec<Pile>) -> Result<Self> {
        if names.len() < 2 {
            return Err(EngineError::InvalidRoster(format!(
                "need at least 2 players, got {}",
                names.len()
            )));
        }
        let supply = Supply::new(kingdom, names.len())?;
        let players = names.into_iter().map(Player::new).collect();

        Ok(GameState {
            players,
            supply,
            trash: Pile::new(),
            turn: TurnState::new(),
            rng: RefCell::new(ChaCha12Rng::seed_from_u64(0)),
            logger: GameLogger::new(),
        })
    }

    /// Set the RNG seed for deterministic gameplay.
    ///
    /// Call before `deal_opening_hands` so the whole match (including the
    /// opening shuffles) replays identically for a given seed.
    pub fn seed_rng(&mut self, seed: u64) {
        *self.rng.borrow_mut() = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Shuffle every deck and deal each player their opening hand of 5.
    pub fn deal_opening_hands(&mut self) {
        let mut rng = self.rng.borrow_mut();
        for player in &mut self.players {
            player.deck.shuffle(&mut *rng);
            player.draw_to_hand(&mut *rng, crate::core::player::HAND_SIZE);
        }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn.current_player_idx]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn.current_player_idx]
    }

    /// Opponents of `player_idx` in cyclic turn order, starting with the
    /// player immediately after and ending with the one immediately
    /// before.
    pub fn other_player_indices(&self, player_idx: usize) -> Vec<usize> {
        (1..self.players.len())
            .map(|offset| (player_idx + offset) % self.players.len())
            .collect()
    }

    /// Draw up to `n` cards into a player's hand, reshuffling the discard
    /// into the deck as needed. Returns the number actually drawn.
    pub fn draw_cards(&mut self, player_idx: usize, n: usize) -> usize {
        let mut rng = self.rng.borrow_mut();
        self.players[player_idx].draw_to_hand(&mut *rng, n)
    }

    /// Total card copies across every container (players, supply, trash).
    ///
    /// Constant for the whole match; the conservation tests rely on it.
    pub fn total_card_count(&self) -> usize {
        let player_cards: usize = self.players.iter().map(|p| p.total_cards()).sum();
        player_cards + self.supply.total_cards() + self.trash.len()
    }
}

impl fmt::Display for GameState {
    /// Renderable state snapshot: the current player's name plus one
    /// entry per supply pile in fixed order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     -- {}'s Turn --", self.current_player().name)?;
        writeln!(f, "{}", self.supply)
    }
}
