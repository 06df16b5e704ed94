//! Game loop implementation
//!
//! Drives each player's turn through the Action, Buy, and Cleanup phases,
//! validates decisions against the legal sets, and watches the supply for
//! the end-of-game conditions.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When the verbose-logging feature is disabled this becomes a no-op at
/// compile time, eliminating the format! allocations.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.game.logger.verbose(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::core::player::HAND_SIZE;
use crate::core::{Card, PlayerName};
use crate::error::{EngineError, Result};
use crate::game::controller::{
    request_decision, unique_cards, ChoiceKind, DecisionProvider, GameStateView,
};
use crate::game::effects::play_card;
use crate::game::phase::Phase;
use crate::game::GameState;
use smallvec::SmallVec;

/// Reason the match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndReason {
    /// The Province pile ran out
    ProvinceEmpty,
    /// Three or more supply piles ran out
    ThreePilesEmpty,
    /// Defensive turn cap tripped without the supply finishing
    TurnLimit,
}

/// One player's line in the end-of-match report
#[derive(Debug, Clone)]
pub struct PlayerScore {
    pub name: PlayerName,
    pub victory_points: i32,
    /// Every card the player owns (deck + hand + discard + in-play)
    pub cards: Vec<Card>,
}

/// Result of running a match to completion
#[derive(Debug, Clone)]
pub struct GameReport {
    /// One score per player, in roster order
    pub scores: Vec<PlayerScore>,
    /// Roster index of the winner (highest points; earliest roster
    /// position breaks ties)
    pub winner: usize,
    /// Total number of turns played
    pub turns_played: u32,
    pub end_reason: GameEndReason,
}

/// Game loop manager
///
/// Handles turn progression, phase execution, and end-condition checking.
pub struct GameLoop<'a> {
    /// The game state
    pub game: &'a mut GameState,
    /// Maximum turns before aborting the match
    max_turns: u32,
    /// Turn counter for the loop
    turns_elapsed: u32,
}

impl<'a> GameLoop<'a> {
    /// Create a new game loop for the given game state
    pub fn new(game: &'a mut GameState) -> Self {
        GameLoop {
            game,
            max_turns: 1000, // Default maximum turns
            turns_elapsed: 0,
        }
    }

    /// Set maximum turns before aborting
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Run the match with the given decision providers, one per player in
    /// roster order.
    ///
    /// Returns when the supply reports the game finished (or the turn cap
    /// trips).
    pub fn run_game(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> Result<GameReport> {
        if providers.len() != self.game.num_players() {
            return Err(EngineError::InvalidRoster(format!(
                "{} players but {} decision providers",
                self.game.num_players(),
                providers.len()
            )));
        }

        self.game.deal_opening_hands();

        let end_reason = loop {
            if let Some(reason) = self.end_reason() {
                break reason;
            }
            if self.turns_elapsed >= self.max_turns {
                break GameEndReason::TurnLimit;
            }
            self.run_turn(providers)?;
            self.turns_elapsed += 1;
            let next = self.game.num_players();
            self.game.turn.next_turn(next);
        };

        let report = self.build_report(end_reason);
        self.game.logger.minimal("Game over.");
        for score in &report.scores {
            self.game.logger.minimal(&format!(
                "{}: {} Points.",
                score.name, score.victory_points
            ));
        }
        for (idx, provider) in providers.iter_mut().enumerate() {
            let view = GameStateView::new(self.game, idx);
            provider.on_game_end(&view);
        }
        Ok(report)
    }

    /// Run a bounded number of turns.
    ///
    /// A convenience for testing: runs up to `turns_to_run` turns against
    /// already-dealt hands, stopping early if the supply finishes.
    /// Returns the report if the game ended, `None` otherwise.
    pub fn run_turns(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider>],
        turns_to_run: u32,
    ) -> Result<Option<GameReport>> {
        for _ in 0..turns_to_run {
            if let Some(reason) = self.end_reason() {
                return Ok(Some(self.build_report(reason)));
            }
            self.run_turn(providers)?;
            self.turns_elapsed += 1;
            let next = self.game.num_players();
            self.game.turn.next_turn(next);
        }
        Ok(None)
    }

    /// Supply-based end condition, mapped to a report reason.
    fn end_reason(&self) -> Option<GameEndReason> {
        if !self.game.supply.is_finished() {
            return None;
        }
        if self.game.supply.count(Card::Province.name()) == 0 {
            Some(GameEndReason::ProvinceEmpty)
        } else {
            Some(GameEndReason::ThreePilesEmpty)
        }
    }

    /// Run one full turn for the current player: Action, Buy, Cleanup.
    fn run_turn(&mut self, providers: &mut [Box<dyn DecisionProvider>]) -> Result<()> {
        let actor = self.game.turn.current_player_idx;
        self.game.logger.normal(&format!(
            "Turn {}: {}",
            self.game.turn.turn_number,
            self.game.players[actor].name
        ));

        self.game.turn.phase = Phase::Action;
        self.run_action_phase(actor, providers)?;

        self.game.turn.advance_phase();
        debug_assert_eq!(self.game.turn.phase, Phase::Buy);
        self.run_buy_phase(actor, providers)?;

        self.game.turn.advance_phase();
        debug_assert_eq!(self.game.turn.phase, Phase::Cleanup);
        self.run_cleanup_phase(actor);
        Ok(())
    }

    /// Action phase: play Action cards from hand while action plays
    /// remain. Ends on an explicit pass or when the counter reaches zero,
    /// never merely because the hand has no Action card left.
    fn run_action_phase(
        &mut self,
        actor: usize,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> Result<()> {
        while self.game.players[actor].actions > 0 {
            let legal: SmallVec<[Card; 8]> = unique_cards(
                self.game.players[actor]
                    .hand
                    .iter()
                    .copied()
                    .filter(|c| c.is_action()),
            )
            .into();

            let chosen = request_decision(
                self.game,
                providers[actor].as_mut(),
                actor,
                ChoiceKind::PlayAction,
                &legal,
            );
            let Some(card) = chosen else { break };

            self.game.players[actor].hand.remove_card(card);
            self.game.players[actor].in_play.add(card);
            self.game.players[actor].actions -= 1;
            self.game.logger.normal(&format!(
                "{} plays {}",
                self.game.players[actor].name, card
            ));
            play_card(self.game, providers, actor, card)?;
        }
        Ok(())
    }

    /// Buy phase: first play treasures (any order, not resource-gated),
    /// then buy supply cards while buys remain.
    fn run_buy_phase(
        &mut self,
        actor: usize,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> Result<()> {
        // Treasure sub-step
        loop {
            let legal: SmallVec<[Card; 4]> = unique_cards(
                self.game.players[actor]
                    .hand
                    .iter()
                    .copied()
                    .filter(|c| c.is_treasure()),
            )
            .into();
            if legal.is_empty() {
                break;
            }

            let chosen = request_decision(
                self.game,
                providers[actor].as_mut(),
                actor,
                ChoiceKind::PlayTreasure,
                &legal,
            );
            let Some(card) = chosen else { break };

            self.game.players[actor].hand.remove_card(card);
            self.game.players[actor].in_play.add(card);
            self.game.players[actor].coins += card.treasure_value();
            log_if_verbose!(
                self,
                "{} plays {} ({} coins total)",
                self.game.players[actor].name,
                card,
                self.game.players[actor].coins
            );
        }

        // Purchase sub-step
        while self.game.players[actor].buys > 0 {
            let coins = self.game.players[actor].coins;
            let legal: SmallVec<[Card; 16]> = self
                .game
                .supply
                .available_cards()
                .into_iter()
                .filter(|c| c.cost() <= coins)
                .collect();

            let chosen = request_decision(
                self.game,
                providers[actor].as_mut(),
                actor,
                ChoiceKind::BuyCard,
                &legal,
            );
            let Some(card) = chosen else { break };

            // Atomic: the supply removal and the discard gain happen as
            // one step with no observable intermediate state.
            let bought = self
                .game
                .supply
                .remove(card.name())
                .ok_or_else(|| EngineError::InvalidAction(format!("{card} left the supply")))?;
            self.game.players[actor].gain(bought);
            self.game.players[actor].buys -= 1;
            self.game.players[actor].coins -= card.cost();
            self.game.logger.normal(&format!(
                "{} buys {}",
                self.game.players[actor].name, card
            ));
        }
        Ok(())
    }

    /// Cleanup: discard hand and play area, draw a fresh hand of 5,
    /// reset the turn counters.
    fn run_cleanup_phase(&mut self, actor: usize) {
        let player = &mut self.game.players[actor];
        player.hand.drain_into(&mut player.discard);
        player.in_play.drain_into(&mut player.discard);
        self.game.draw_cards(actor, HAND_SIZE);
        self.game.players[actor].reset_turn_resources();
        log_if_verbose!(self, "{} ends their turn", self.game.players[actor].name);
    }

    /// Final scores, in roster order, plus the winner.
    fn build_report(&self, end_reason: GameEndReason) -> GameReport {
        let scores: Vec<PlayerScore> = self
            .game
            .players
            .iter()
            .map(|p| PlayerScore {
                name: p.name.clone(),
                victory_points: p.victory_points(),
                cards: p.all_cards(),
            })
            .collect();

        let winner = scores
            .iter()
            .enumerate()
            .max_by_key(|(idx, s)| (s.victory_points, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        GameReport {
            scores,
            winner,
            turns_played: self.turns_elapsed,
            end_reason,
        }
    }
}
