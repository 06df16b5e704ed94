//! Card effect resolution
//!
//! One exhaustive dispatch over the catalog for Action-typed cards. The
//! card has already been moved to the acting player's play area and the
//! action counter decremented by the time its effect runs. Attack effects
//! route every opponent through the reaction resolver first, in cyclic
//! order starting immediately after the attacker.

use crate::core::Card;
use crate::error::{EngineError, Result};
use crate::game::controller::{request_decision, unique_cards, ChoiceKind, DecisionProvider};
use crate::game::reaction::player_react;
use crate::game::GameState;

/// Opponents must discard down to this hand size under Militia.
const MILITIA_HAND_SIZE: usize = 3;

/// Chapel trashes at most this many cards.
const CHAPEL_TRASH_LIMIT: usize = 4;

/// Resolve the effect of an Action card just played by `actor`.
pub fn play_card(
    game: &mut GameState,
    providers: &mut [Box<dyn DecisionProvider>],
    actor: usize,
    card: Card,
) -> Result<()> {
    match card {
        Card::Village => {
            game.draw_cards(actor, 1);
            game.players[actor].actions += 2;
        }
        Card::Smithy => {
            game.draw_cards(actor, 3);
        }
        Card::Laboratory => {
            game.draw_cards(actor, 2);
            game.players[actor].actions += 1;
        }
        Card::Market => {
            game.draw_cards(actor, 1);
            game.players[actor].actions += 1;
            game.players[actor].buys += 1;
            game.players[actor].coins += 1;
        }
        Card::Festival => {
            game.players[actor].actions += 2;
            game.players[actor].buys += 1;
            game.players[actor].coins += 2;
        }
        Card::Woodcutter => {
            game.players[actor].buys += 1;
            game.players[actor].coins += 2;
        }
        // Moat's reaction half lives in the reaction resolver; played on
        // its owner's own turn it is only a draw.
        Card::Moat => {
            game.draw_cards(actor, 2);
        }
        Card::Chapel => {
            resolve_chapel(game, providers, actor);
        }
        Card::CouncilRoom => {
            game.draw_cards(actor, 4);
            game.players[actor].buys += 1;
            // Every opponent draws; not an attack, no reaction check
            for target in game.other_player_indices(actor) {
                game.draw_cards(target, 1);
            }
        }
        Card::Militia => {
            game.players[actor].coins += 2;
            for target in game.other_player_indices(actor) {
                if !player_react(game, providers[target].as_mut(), target, card) {
                    resolve_militia_discard(game, providers, target);
                }
            }
        }
        Card::Witch => {
            game.draw_cards(actor, 2);
            for target in game.other_player_indices(actor) {
                if !player_react(game, providers[target].as_mut(), target, card) {
                    // An empty Curse pile means this opponent gains nothing
                    if let Some(curse) = game.supply.remove(Card::Curse.name()) {
                        game.players[target].gain(curse);
                        game.logger.normal(&format!(
                            "{} gains a Curse",
                            game.players[target].name
                        ));
                    }
                }
            }
        }
        _ => {
            return Err(EngineError::InvalidAction(format!(
                "{card} is not an Action card"
            )));
        }
    }
    Ok(())
}

/// Chapel: trash up to 4 cards from hand, stopping on pass.
fn resolve_chapel(
    game: &mut GameState,
    providers: &mut [Box<dyn DecisionProvider>],
    actor: usize,
) {
    for _ in 0..CHAPEL_TRASH_LIMIT {
        let legal = unique_cards(game.players[actor].hand.iter().copied());
        if legal.is_empty() {
            break;
        }
        let chosen = request_decision(
            game,
            providers[actor].as_mut(),
            actor,
            ChoiceKind::TrashFromHand,
            &legal,
        );
        match chosen {
            Some(card) => {
                game.players[actor].hand.remove_card(card);
                game.trash.add(card);
                game.logger
                    .verbose(&format!("{} trashes {}", game.players[actor].name, card));
            }
            None => break,
        }
    }
}

/// Militia's harmful half: the target discards down to 3 cards.
fn resolve_militia_discard(
    game: &mut GameState,
    providers: &mut [Box<dyn DecisionProvider>],
    target: usize,
) {
    while game.players[target].hand.len() > MILITIA_HAND_SIZE {
        let legal = unique_cards(game.players[target].hand.iter().copied());
        let chosen = request_decision(
            game,
            providers[target].as_mut(),
            target,
            ChoiceKind::DiscardToHandSize {
                target: MILITIA_HAND_SIZE,
            },
            &legal,
        );
        // Forced choice with a non-empty legal set always yields a card
        if let Some(card) = chosen {
            game.players[target].hand.remove_card(card);
            game.players[target].discard.add(card);
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerName;
    use crate::game::controller::Decision;
    use crate::game::ScriptedController;
    use crate::pile::Pile;

    fn test_game(names: &[&str]) -> GameState {
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
        let mut game = GameState::new(
            names.iter().map(|&n| PlayerName::from(n)).collect(),
            kingdom,
        )
        .unwrap();
        game.seed_rng(1);
        game
    }

    fn passive_providers(n: usize) -> Vec<Box<dyn DecisionProvider>> {
        (0..n)
            .map(|_| Box::new(ScriptedController::new(vec![])) as Box<dyn DecisionProvider>)
            .collect()
    }

    #[test]
    fn test_village() {
        let mut game = test_game(&["Alice", "Bob"]);
        let mut providers = passive_providers(2);

        play_card(&mut game, &mut providers, 0, Card::Village).unwrap();
        assert_eq!(game.players[0].hand.len(), 1);
        assert_eq!(game.players[0].actions, 3);
    }

    #[test]
    fn test_market() {
        let mut game = test_game(&["Alice", "Bob"]);
        let mut providers = passive_providers(2);

        play_card(&mut game, &mut providers, 0, Card::Market).unwrap();
        let p = &game.players[0];
        assert_eq!(p.hand.len(), 1);
        assert_eq!(p.actions, 2);
        assert_eq!(p.buys, 2);
        assert_eq!(p.coins, 1);
    }

    #[test]
    fn test_non_action_is_rejected() {
        let mut game = test_game(&["Alice", "Bob"]);
        let mut providers = passive_providers(2);

        assert!(matches!(
            play_card(&mut game, &mut providers, 0, Card::Gold),
            Err(EngineError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_witch_curses_unprotected_opponents() {
        let mut game = test_game(&["Alice", "Bob", "Carol"]);
        let mut providers = passive_providers(3);
        let total = game.total_card_count();
        let curses_before = game.supply.count("Curse");

        play_card(&mut game, &mut providers, 0, Card::Witch).unwrap();

        assert_eq!(game.players[0].hand.len(), 2);
        assert_eq!(game.players[1].discard.count(Card::Curse), 1);
        assert_eq!(game.players[2].discard.count(Card::Curse), 1);
        assert_eq!(game.supply.count("Curse"), curses_before - 2);
        assert_eq!(game.total_card_count(), total);
    }

    #[test]
    fn test_witch_skips_revealed_moat() {
        let mut game = test_game(&["Alice", "Bob", "Carol"]);
        game.players[1].hand.add(Card::Moat);

        let mut providers: Vec<Box<dyn DecisionProvider>> = vec![
            Box::new(ScriptedController::new(vec![])),
            Box::new(ScriptedController::new(vec![Decision::named(Card::Moat)])),
            Box::new(ScriptedController::new(vec![])),
        ];

        play_card(&mut game, &mut providers, 0, Card::Witch).unwrap();

        // Bob intercepted; Carol did not
        assert_eq!(game.players[1].discard.count(Card::Curse), 0);
        assert!(game.players[1].hand.contains(Card::Moat));
        assert_eq!(game.players[2].discard.count(Card::Curse), 1);
    }

    #[test]
    fn test_witch_with_empty_curse_pile() {
        let mut game = test_game(&["Alice", "Bob"]);
        let mut providers = passive_providers(2);
        while game.supply.remove("Curse").is_some() {}

        play_card(&mut game, &mut providers, 0, Card::Witch).unwrap();

        // Opponent simply gains nothing
        assert_eq!(game.players[1].discard.len(), 0);
        assert_eq!(game.players[0].hand.len(), 2);
    }

    #[test]
    fn test_militia_forces_discard_to_three() {
        let mut game = test_game(&["Alice", "Bob"]);
        game.draw_cards(1, 5);
        assert_eq!(game.players[1].hand.len(), 5);

        let bob_hand: Vec<Card> = game.players[1].hand.iter().copied().collect();
        let mut providers: Vec<Box<dyn DecisionProvider>> = vec![
            Box::new(ScriptedController::new(vec![])),
            Box::new(ScriptedController::new(vec![
                Decision::named(bob_hand[0]),
                Decision::named(bob_hand[1]),
            ])),
        ];

        play_card(&mut game, &mut providers, 0, Card::Militia).unwrap();

        assert_eq!(game.players[0].coins, 2);
        assert_eq!(game.players[1].hand.len(), 3);
        assert_eq!(game.players[1].discard.len(), 2);
    }

    #[test]
    fn test_chapel_trashes_up_to_four() {
        let mut game = test_game(&["Alice", "Bob"]);
        game.draw_cards(0, 5);
        let hand: Vec<Card> = game.players[0].hand.iter().copied().collect();

        let mut providers: Vec<Box<dyn DecisionProvider>> = vec![
            Box::new(ScriptedController::new(vec![
                Decision::named(hand[0]),
                Decision::named(hand[1]),
                Decision::Pass,
            ])),
            Box::new(ScriptedController::new(vec![])),
        ];

        let total = game.total_card_count();
        play_card(&mut game, &mut providers, 0, Card::Chapel).unwrap();

        assert_eq!(game.players[0].hand.len(), 3);
        assert_eq!(game.trash.len(), 2);
        assert_eq!(game.total_card_count(), total);
    }

    #[test]
    fn test_council_room_draws_for_everyone() {
        let mut game = test_game(&["Alice", "Bob", "Carol"]);
        // Carol holds a Moat: Council Room is not an attack, she draws anyway
        game.players[2].hand.add(Card::Moat);
        let mut providers = passive_providers(3);

        play_card(&mut game, &mut providers, 0, Card::CouncilRoom).unwrap();

        assert_eq!(game.players[0].hand.len(), 4);
        assert_eq!(game.players[0].buys, 2);
        assert_eq!(game.players[1].hand.len(), 1);
        assert_eq!(game.players[2].hand.len(), 2);
    }
}
