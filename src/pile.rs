//! Card piles (deck, hand, discard, in-play, trash, supply stacks)

use crate::core::Card;
use serde::{Deserialize, Serialize};

/// An ordered sequence of card copies.
///
/// Order matters for the deck (last element = top = next drawn). The other
/// piles are semantically unordered but kept as sequences so matches are
/// deterministic under a fixed seed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Pile { cards: Vec::new() }
    }

    /// Build a homogeneous pile of `count` copies (supply stacks).
    pub fn of(card: Card, count: usize) -> Self {
        Pile {
            cards: vec![card; count],
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first copy of `card`, preserving the order of the rest.
    ///
    /// We use remove() instead of swap_remove() because iteration order
    /// matters for deterministic gameplay: controllers see cards in a
    /// consistent order, and swap_remove would break determinism tests.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw from the top (for the deck).
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Look at the top card without removing it.
    pub fn peek_top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Shuffle the pile (discard being reshuffled into the deck).
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Move every card into `other`, leaving this pile empty.
    pub fn drain_into(&mut self, other: &mut Pile) {
        other.cards.append(&mut self.cards);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Pile {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());

        pile.add(Card::Copper);
        pile.add(Card::Estate);
        pile.add(Card::Copper);

        assert_eq!(pile.len(), 3);
        assert_eq!(pile.count(Card::Copper), 2);

        assert!(pile.remove_card(Card::Copper));
        assert_eq!(pile.count(Card::Copper), 1);

        // Removing from a pile with no matching copy signals false, not a crash
        assert!(!pile.remove_card(Card::Witch));
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_draw_order() {
        let mut deck = Pile::new();
        deck.add(Card::Estate); // Bottom
        deck.add(Card::Silver);
        deck.add(Card::Copper); // Top

        assert_eq!(deck.peek_top(), Some(Card::Copper));
        assert_eq!(deck.draw_top(), Some(Card::Copper));
        assert_eq!(deck.draw_top(), Some(Card::Silver));
        assert_eq!(deck.draw_top(), Some(Card::Estate));
        assert_eq!(deck.draw_top(), None);
    }

    #[test]
    fn test_drain_into() {
        let mut hand = Pile::of(Card::Copper, 3);
        let mut discard = Pile::of(Card::Estate, 1);

        hand.drain_into(&mut discard);

        assert!(hand.is_empty());
        assert_eq!(discard.len(), 4);
    }

    #[test]
    fn test_homogeneous_pile() {
        let pile = Pile::of(Card::Province, 8);
        assert_eq!(pile.len(), 8);
        assert_eq!(pile.peek_top(), Some(Card::Province));
    }
}
