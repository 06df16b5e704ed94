//! Scripted decision provider for testing
//!
//! Follows a predetermined sequence of decisions, then passes forever.
//! Useful for deterministic tests and examples.

use crate::core::Card;
use crate::game::controller::{ChoiceKind, Decision, DecisionProvider, GameStateView};

/// A provider that answers from a fixed script
pub struct ScriptedController {
    decisions: Vec<Decision>,
    cursor: usize,
    requests_seen: usize,
}

impl ScriptedController {
    /// Create a new scripted provider with a sequence of decisions
    pub fn new(decisions: Vec<Decision>) -> Self {
        ScriptedController {
            decisions,
            cursor: 0,
            requests_seen: 0,
        }
    }

    /// How many times the engine has asked this provider for a decision
    pub fn requests_seen(&self) -> usize {
        self.requests_seen
    }
}

impl DecisionProvider for ScriptedController {
    fn choose_card(
        &mut self,
        _view: &GameStateView,
        _kind: ChoiceKind,
        _legal: &[Card],
    ) -> Decision {
        self.requests_seen += 1;
        if self.cursor < self.decisions.len() {
            let decision = self.decisions[self.cursor].clone();
            self.cursor += 1;
            decision
        } else {
            // Script exhausted, pass on everything
            Decision::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerName;
    use crate::game::GameState;
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
        GameState::new(
            vec![PlayerName::from("Alice"), PlayerName::from("Bob")],
            kingdom,
        )
        .unwrap()
    }

    #[test]
    fn test_follows_script_then_passes() {
        let game = test_game();
        let view = GameStateView::new(&game, 0);
        let mut controller = ScriptedController::new(vec![
            Decision::named(Card::Village),
            Decision::Pass,
            Decision::named(Card::Copper),
        ]);

        let legal = [Card::Village, Card::Copper];
        assert_eq!(
            controller.choose_card(&view, ChoiceKind::PlayAction, &legal),
            Decision::named(Card::Village)
        );
        assert_eq!(
            controller.choose_card(&view, ChoiceKind::PlayAction, &legal),
            Decision::Pass
        );
        assert_eq!(
            controller.choose_card(&view, ChoiceKind::PlayTreasure, &legal),
            Decision::named(Card::Copper)
        );

        // Script exhausted
        assert_eq!(
            controller.choose_card(&view, ChoiceKind::BuyCard, &legal),
            Decision::Pass
        );
        assert_eq!(controller.requests_seen(), 4);
    }
}
