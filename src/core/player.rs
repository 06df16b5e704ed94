//! Player representation: piles and turn resources

use crate::core::{Card, PlayerName};
use crate::pile::Pile;
use serde::{Deserialize, Serialize};

/// A player's starting deck: 7 Copper and 3 Estate.
const STARTING_COPPER: usize = 7;
const STARTING_ESTATE: usize = 3;

/// Cards drawn into the hand at the start of every turn.
pub const HAND_SIZE: usize = 5;

/// Represents a player in the game
///
/// Owns four piles (the trash is shared, on `GameState`) plus the
/// turn-scoped resource counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Player name
    pub name: PlayerName,

    /// Draw pile (top = last element = next drawn)
    pub deck: Pile,

    /// Current hand
    pub hand: Pile,

    /// Discard pile
    pub discard: Pile,

    /// Cards played this turn
    pub in_play: Pile,

    /// Action plays remaining this turn
    pub actions: u32,

    /// Buys remaining this turn
    pub buys: u32,

    /// Coins available this turn
    pub coins: u32,
}

impl Player {
    /// Create a player with the standard starting deck, unshuffled.
    ///
    /// The caller shuffles and deals the opening hand (game setup owns the
    /// RNG).
    pub fn new(name: impl Into<PlayerName>) -> Self {
        let mut deck = Pile::new();
        for _ in 0..STARTING_COPPER {
            deck.add(Card::Copper);
        }
        for _ in 0..STARTING_ESTATE {
            deck.add(Card::Estate);
        }
        Player {
            name: name.into(),
            deck,
            hand: Pile::new(),
            discard: Pile::new(),
            in_play: Pile::new(),
            actions: 1,
            buys: 1,
            coins: 0,
        }
    }

    /// Draw one card from the deck.
    ///
    /// Reshuffling is an explicit two-step operation: if the deck is
    /// exhausted, the discard pile is shuffled into the deck first, then
    /// the top card is drawn. Returns `None` only when deck and discard
    /// are both empty.
    pub fn draw_card(&mut self, rng: &mut impl rand::Rng) -> Option<Card> {
        if self.deck.is_empty() {
            self.discard.drain_into(&mut self.deck);
            self.deck.shuffle(rng);
        }
        self.deck.draw_top()
    }

    /// Draw up to `n` cards into the hand.
    pub fn draw_to_hand(&mut self, rng: &mut impl rand::Rng, n: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..n {
            match self.draw_card(rng) {
                Some(card) => {
                    self.hand.add(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Gain a card into the discard pile.
    pub fn gain(&mut self, card: Card) {
        self.discard.add(card);
    }

    /// Reset turn resources for the next turn.
    pub fn reset_turn_resources(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.coins = 0;
    }

    /// Every card this player owns, across all four piles.
    pub fn all_cards(&self) -> Vec<Card> {
        self.deck
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard.iter())
            .chain(self.in_play.iter())
            .copied()
            .collect()
    }

    /// Total number of cards owned.
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len() + self.in_play.len()
    }

    /// Victory points from every owned card.
    pub fn victory_points(&self) -> i32 {
        let total = self.total_cards();
        self.all_cards()
            .into_iter()
            .map(|c| c.victory_points(total))
            .sum()
    }

    /// Does the hand hold any Reaction-typed card?
    pub fn has_reaction(&self) -> bool {
        self.hand.iter().any(|c| c.is_reaction())
    }
}
