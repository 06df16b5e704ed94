//! Attack interception via revealed Reaction cards

use crate::core::Card;
use crate::game::controller::{request_decision, unique_cards, ChoiceKind, DecisionProvider};
use crate::game::GameState;

/// Ask one attack target whether it intercepts the attack.
///
/// Called once per opponent per attack instance. If the target holds no
/// Reaction-typed card the answer is false without consulting its
/// provider. A revealed reaction stays in the target's hand and blocks
/// only this attack instance for this target; other opponents decide
/// independently.
pub fn player_react(
    game: &GameState,
    provider: &mut dyn DecisionProvider,
    target_idx: usize,
    attack: Card,
) -> bool {
    let reactions = unique_cards(
        game.players[target_idx]
            .hand
            .iter()
            .copied()
            .filter(|c| c.is_reaction()),
    );
    if reactions.is_empty() {
        return false;
    }

    let revealed = request_decision(
        game,
        provider,
        target_idx,
        ChoiceKind::RevealReaction { attack },
        &reactions,
    );
    match revealed {
        Some(card) => {
            game.logger.normal(&format!(
                "{} reveals {} and is unaffected by {}",
                game.players[target_idx].name, card, attack
            ));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerName;
    use crate::game::controller::Decision;
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
        GameState::new(
            vec![PlayerName::from("Alice"), PlayerName::from("Bob")],
            kingdom,
        )
        .unwrap()
    }

    #[test]
    fn test_no_reaction_in_hand_skips_provider() {
        let game = test_game();
        let mut provider = ScriptedController::new(vec![]);
        assert!(!player_react(&game, &mut provider, 1, Card::Witch));
        assert_eq!(provider.requests_seen(), 0);
    }

    #[test]
    fn test_revealed_reaction_intercepts() {
        let mut game = test_game();
        game.players[1].hand.add(Card::Moat);

        let mut provider = ScriptedController::new(vec![Decision::named(Card::Moat)]);
        assert!(player_react(&game, &mut provider, 1, Card::Witch));

        // The reaction stays in hand
        assert!(game.players[1].hand.contains(Card::Moat));
    }

    #[test]
    fn test_declined_reaction_does_not_intercept() {
        let mut game = test_game();
        game.players[1].hand.add(Card::Moat);

        let mut provider = ScriptedController::new(vec![Decision::Pass]);
        assert!(!player_react(&game, &mut provider, 1, Card::Witch));
    }
}
