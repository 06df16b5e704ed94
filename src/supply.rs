//! Supply manager: the shared piles cards are bought and gained from
//!
//! Pile order is fixed at construction (kingdom piles first, then the
//! basic piles) and never changes; an emptied pile keeps its slot so the
//! end-of-game conditions and the rendered summary stay stable.

use crate::core::Card;
use crate::error::{EngineError, Result};
use crate::pile::Pile;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

const COPPER_COUNT: usize = 60;
const SILVER_COUNT: usize = 40;
const GOLD_COUNT: usize = 30;
const CURSES_PER_OPPONENT: usize = 10;

/// Number of kingdom piles a match is set up with.
pub const KINGDOM_PILES: usize = 10;

/// The shared supply: one pile per distinct card kind.
///
/// Serialize-only: the name index holds static strings and is rebuilt at
/// construction, and matches are never resumed from saved state.
#[derive(Debug, Clone, Serialize)]
pub struct Supply {
    /// Piles in fixed construction order
    piles: Vec<Pile>,

    /// The card kind each pile held at construction (survives emptying)
    kinds: Vec<Card>,

    /// Name -> pile index, so lookups avoid a linear scan
    #[serde(skip)]
    by_name: FxHashMap<&'static str, usize>,
}

impl Supply {
    /// Build the supply for a match.
    ///
    /// `kingdom` must be exactly [`KINGDOM_PILES`] non-empty homogeneous
    /// piles. The basic piles are appended per rule: Copper 60, Silver 40,
    /// Gold 30, Estate/Duchy/Province 8 each for 2 players else 12, and
    /// 10 Curses per opponent.
    pub fn new(kingdom: Vec<Pile>, num_players: usize) -> Result<Self> {
        if num_players < 2 {
            return Err(EngineError::InvalidRoster(format!(
                "need at least 2 players, got {num_players}"
            )));
        }
        if kingdom.len() != KINGDOM_PILES {
            return Err(EngineError::InvalidKingdom(format!(
                "expected {} kingdom piles, got {}",
                KINGDOM_PILES,
                kingdom.len()
            )));
        }
        for pile in &kingdom {
            let top = pile.peek_top().ok_or_else(|| {
                EngineError::InvalidKingdom("kingdom pile is empty".to_string())
            })?;
            if pile.iter().any(|&c| c != top) {
                return Err(EngineError::InvalidKingdom(format!(
                    "kingdom pile for {top} is not homogeneous"
                )));
            }
        }

        let victory_count = if num_players == 2 { 8 } else { 12 };
        let curse_count = CURSES_PER_OPPONENT * (num_players - 1);

        let mut piles = kingdom;
        piles.push(Pile::of(Card::Copper, COPPER_COUNT));
        piles.push(Pile::of(Card::Silver, SILVER_COUNT));
        piles.push(Pile::of(Card::Gold, GOLD_COUNT));
        piles.push(Pile::of(Card::Estate, victory_count));
        piles.push(Pile::of(Card::Duchy, victory_count));
        piles.push(Pile::of(Card::Province, victory_count));
        piles.push(Pile::of(Card::Curse, curse_count));

        let kinds: Vec<Card> = piles
            .iter()
            .map(|p| p.peek_top().expect("piles are non-empty at construction"))
            .collect();

        let mut supply = Supply {
            piles,
            kinds,
            by_name: FxHashMap::default(),
        };
        supply.rebuild_index();
        Ok(supply)
    }

    /// Rebuild the name index. First pile wins on duplicate names, the
    /// same tie rule a fixed-order scan would give `peek` and `remove`.
    fn rebuild_index(&mut self) {
        self.by_name.clear();
        for (i, kind) in self.kinds.iter().enumerate() {
            self.by_name.entry(kind.name()).or_insert(i);
        }
    }

    /// One representative card per non-empty pile, in fixed pile order.
    pub fn available_cards(&self) -> Vec<Card> {
        self.piles.iter().filter_map(|p| p.peek_top()).collect()
    }

    /// A representative copy of the named card, if its pile is non-empty.
    pub fn peek(&self, name: &str) -> Option<Card> {
        let &idx = self.by_name.get(name)?;
        self.piles[idx].peek_top()
    }

    /// Remove one copy of the named card from its pile.
    ///
    /// Atomic: either a card comes out and is returned, or nothing
    /// changes and `None` is returned.
    pub fn remove(&mut self, name: &str) -> Option<Card> {
        let &idx = self.by_name.get(name)?;
        self.piles[idx].draw_top()
    }

    /// Remaining copies in the named pile (0 for unknown names).
    pub fn count(&self, name: &str) -> usize {
        self.by_name
            .get(name)
            .map(|&idx| self.piles[idx].len())
            .unwrap_or(0)
    }

    pub fn num_piles(&self) -> usize {
        self.piles.len()
    }

    pub fn num_empty_piles(&self) -> usize {
        self.piles.iter().filter(|p| p.is_empty()).count()
    }

    /// Total cards remaining across every pile (conservation checks).
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|p| p.len()).sum()
    }

    /// Is the match over?
    ///
    /// True when the Province pile is empty or at least 3 piles are
    /// empty. A supply somehow set up without a Province pile counts as
    /// already depleted, per the documented assumption that every match
    /// contains one.
    pub fn is_finished(&self) -> bool {
        let mut province_gone = true;
        let mut empty = 0;
        for pile in &self.piles {
            if pile.is_empty() {
                empty += 1;
            } else if pile.peek_top() == Some(Card::Province) {
                province_gone = false;
            }
        }
        province_gone || empty >= 3
    }

    /// Iterate (original kind, remaining count) in fixed pile order.
    pub fn pile_summaries(&self) -> impl Iterator<Item = (Card, usize)> + '_ {
        self.kinds
            .iter()
            .zip(self.piles.iter())
            .map(|(&kind, pile)| (kind, pile.len()))
    }
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, count) in self.pile_summaries() {
            if count == 0 {
                write!(f, "[Empty stack]   ")?;
            } else {
                write!(f, "{} x{}({})   ", kind.name(), count, kind.cost())?;
            }
        }
        Ok(())
    }
}
