//! Decision-provider trait and game state view
//!
//! The engine calls the provider whenever the rules need a player
//! decision, handing it a read-only view of the game state and the set of
//! legal cards. The provider answers with a card name or a pass; anything
//! outside the legal set is rejected here and re-requested, with no state
//! mutation.

use crate::core::Card;
use crate::game::GameState;
use std::fmt;

/// A player's answer to a decision request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The name of a card from the offered legal set
    Named(String),
    /// Decline / done
    Pass,
}

impl Decision {
    /// Convenience constructor for scripted decisions.
    pub fn named(card: Card) -> Self {
        Decision::Named(card.name().to_string())
    }
}

/// What kind of decision is being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Action phase: pick an Action card from hand to play
    PlayAction,
    /// Buy phase: pick a Treasure card from hand to play
    PlayTreasure,
    /// Buy phase: pick an affordable supply card to buy
    BuyCard,
    /// Reveal a Reaction card to intercept this attack
    RevealReaction { attack: Card },
    /// Pick a card from hand to trash
    TrashFromHand,
    /// Pick a card from hand to discard (forced until hand size reached)
    DiscardToHandSize { target: usize },
}

impl ChoiceKind {
    /// Forced choices cannot be passed while legal options remain.
    pub fn is_forced(&self) -> bool {
        matches!(self, ChoiceKind::DiscardToHandSize { .. })
    }
}

impl fmt::Display for ChoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceKind::PlayAction => write!(f, "Play an Action card"),
            ChoiceKind::PlayTreasure => write!(f, "Play a Treasure card"),
            ChoiceKind::BuyCard => write!(f, "Buy a card"),
            ChoiceKind::RevealReaction { attack } => {
                write!(f, "Reveal a Reaction against {attack}")
            }
            ChoiceKind::TrashFromHand => write!(f, "Trash a card from your hand"),
            ChoiceKind::DiscardToHandSize { target } => {
                write!(f, "Discard down to {target} cards")
            }
        }
    }
}

/// Read-only view of game state for decision providers
///
/// Providers only inspect this view; all mutation stays in the engine.
pub struct GameStateView<'a> {
    game: &'a GameState,
    player_idx: usize,
}

impl<'a> GameStateView<'a> {
    /// Create a view of the game from one player's perspective
    pub fn new(game: &'a GameState, player_idx: usize) -> Self {
        GameStateView { game, player_idx }
    }

    /// Index of the player this view is for
    pub fn player_idx(&self) -> usize {
        self.player_idx
    }

    /// This player's display name
    pub fn player_name(&self) -> &str {
        self.game.players[self.player_idx].name.as_str()
    }

    /// Cards in this player's hand
    pub fn hand(&self) -> &[Card] {
        self.game.players[self.player_idx].hand.as_slice()
    }

    pub fn deck_size(&self) -> usize {
        self.game.players[self.player_idx].deck.len()
    }

    pub fn discard_size(&self) -> usize {
        self.game.players[self.player_idx].discard.len()
    }

    pub fn actions(&self) -> u32 {
        self.game.players[self.player_idx].actions
    }

    pub fn buys(&self) -> u32 {
        self.game.players[self.player_idx].buys
    }

    pub fn coins(&self) -> u32 {
        self.game.players[self.player_idx].coins
    }

    /// Remaining copies of a named supply pile
    pub fn supply_count(&self, name: &str) -> usize {
        self.game.supply.count(name)
    }

    /// The rendered state snapshot (current player + supply summary)
    pub fn render(&self) -> String {
        self.game.to_string()
    }
}

/// Decision provider trait
///
/// Implement this to connect a human interface, a scripted test driver,
/// or an AI baseline. The engine calls `choose_card` at every decision
/// point and validates the answer against `legal`.
pub trait DecisionProvider {
    /// Choose one of the offered legal cards, or pass.
    ///
    /// Returning a name outside `legal` is a contract violation the
    /// engine answers by re-requesting the decision.
    fn choose_card(&mut self, view: &GameStateView, kind: ChoiceKind, legal: &[Card]) -> Decision;

    /// Called once when the match ends (for cleanup/logging)
    fn on_game_end(&mut self, _view: &GameStateView) {}
}

/// Ask `provider` for a card until it names a legal one or passes.
///
/// Illegal decisions are logged and re-requested without mutating any
/// state. For forced choices a pass is also rejected while legal options
/// remain. Returns `None` for a pass (or immediately when nothing is
/// legal to pick in a forced choice).
pub fn request_decision(
    game: &GameState,
    provider: &mut dyn DecisionProvider,
    player_idx: usize,
    kind: ChoiceKind,
    legal: &[Card],
) -> Option<Card> {
    if kind.is_forced() && legal.is_empty() {
        return None;
    }
    let view = GameStateView::new(game, player_idx);
    loop {
        match provider.choose_card(&view, kind, legal) {
            Decision::Pass => {
                if kind.is_forced() {
                    game.logger
                        .verbose(&format!("{}: cannot pass a forced choice", view.player_name()));
                    continue;
                }
                return None;
            }
            Decision::Named(name) => {
                if let Some(&card) = legal.iter().find(|c| c.name() == name) {
                    return Some(card);
                }
                game.logger.verbose(&format!(
                    "{}: '{}' is not a legal choice here, asking again",
                    view.player_name(),
                    name
                ));
            }
        }
    }
}

/// Deduplicate cards by kind, preserving first-seen order.
///
/// Decision prompts offer one entry per distinct name; how many copies sit
/// behind it does not matter to the choice.
pub fn unique_cards(cards: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let mut seen = Vec::new();
    for card in cards {
        if !seen.contains(&card) {
            seen.push(card);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedController;
    use crate::pile::Pile;

    fn test_game() -> GameState {
        let kingdom: Vec<Pile> = [
            Card::Chapel,
            Card::Moat,
            Card::Village,
            Card::Woodcutter,
            Card::Smithy,
            Card::Militia,
            Card::Market,
            Card::Laboratory,
            Card::Festival,
            Card::Witch,
        ]
        .into_iter()
        .map(|c| Pile::of(c, 10))
        .collect();
        GameState::new(vec!["Alice".into(), "Bob".into()], kingdom).unwrap()
    }

    #[test]
    fn test_illegal_name_is_reprompted_without_mutation() {
        let game = test_game();
        let total_before = game.total_card_count();

        let mut provider = ScriptedController::new(vec![
            Decision::Named("Province".to_string()), // not in legal set
            Decision::named(Card::Village),
        ]);

        let chosen = request_decision(
            &game,
            &mut provider,
            0,
            ChoiceKind::PlayAction,
            &[Card::Village, Card::Smithy],
        );
        assert_eq!(chosen, Some(Card::Village));
        assert_eq!(game.total_card_count(), total_before);
    }

    #[test]
    fn test_pass_ends_optional_choice() {
        let game = test_game();
        let mut provider = ScriptedController::new(vec![Decision::Pass]);

        let chosen = request_decision(
            &game,
            &mut provider,
            0,
            ChoiceKind::PlayAction,
            &[Card::Village],
        );
        assert_eq!(chosen, None);
    }

    #[test]
    fn test_forced_choice_rejects_pass() {
        let game = test_game();
        let mut provider = ScriptedController::new(vec![
            Decision::Pass, // rejected: the choice is forced
            Decision::named(Card::Copper),
        ]);

        let chosen = request_decision(
            &game,
            &mut provider,
            0,
            ChoiceKind::DiscardToHandSize { target: 3 },
            &[Card::Copper],
        );
        assert_eq!(chosen, Some(Card::Copper));
    }

    #[test]
    fn test_forced_choice_with_no_options() {
        let game = test_game();
        let mut provider = ScriptedController::new(vec![]);

        let chosen = request_decision(
            &game,
            &mut provider,
            0,
            ChoiceKind::DiscardToHandSize { target: 3 },
            &[],
        );
        assert_eq!(chosen, None);
        // The provider is never consulted when nothing can be picked
        assert_eq!(provider.requests_seen(), 0);
    }

    #[test]
    fn test_unique_cards() {
        let cards = [Card::Copper, Card::Estate, Card::Copper, Card::Moat];
        assert_eq!(
            unique_cards(cards),
            vec![Card::Copper, Card::Estate, Card::Moat]
        );
    }
}
