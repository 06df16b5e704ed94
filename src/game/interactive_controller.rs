//! Interactive controller for human players
//!
//! Prompts on stdout and reads decisions from stdin. This is the only
//! place the engine's decision interface touches a console; everything it
//! knows about the game comes through the read-only view.

use crate::core::Card;
use crate::game::controller::{ChoiceKind, Decision, DecisionProvider, GameStateView};
use std::io::{self, BufRead, Write};

/// A provider that prompts a human player via stdin
pub struct InteractiveController;

impl InteractiveController {
    pub fn new() -> Self {
        InteractiveController
    }

    /// Print the numbered option menu and the player's current resources.
    fn display_menu(&self, view: &GameStateView, kind: ChoiceKind, legal: &[Card]) {
        println!();
        print!("{}", view.render());
        println!(
            "{} | hand: {} | actions: {}, buys: {}, coins: {}",
            view.player_name(),
            format_cards(view.hand()),
            view.actions(),
            view.buys(),
            view.coins()
        );
        println!("{kind}:");
        for (i, card) in legal.iter().enumerate() {
            println!("  {i}: {} (cost {})", card, card.cost());
        }
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        InteractiveController::new()
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DecisionProvider for InteractiveController {
    fn choose_card(&mut self, view: &GameStateView, kind: ChoiceKind, legal: &[Card]) -> Decision {
        self.display_menu(view, kind, legal);
        loop {
            print!("Choose an option number, a card name, or 'p' to pass: ");
            let _ = io::stdout().flush();

            let mut input = String::new();
            match io::stdin().lock().read_line(&mut input) {
                // EOF: treat a closed stdin as passing on everything
                Ok(0) => return Decision::Pass,
                Ok(_) => {}
                Err(_) => {
                    eprintln!("Error reading input");
                    continue;
                }
            }
            let trimmed = input.trim();

            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "p" || trimmed == "pass" || trimmed == "done" {
                return Decision::Pass;
            }

            // Try a menu index first, then a bare card name. Anything the
            // engine still finds illegal comes back here for re-entry.
            if let Ok(index) = trimmed.parse::<usize>() {
                if let Some(card) = legal.get(index) {
                    return Decision::named(*card);
                }
                eprintln!("No option {index}. Enter 0-{}.", legal.len().saturating_sub(1));
                continue;
            }
            return Decision::Named(trimmed.to_string());
        }
    }

    fn on_game_end(&mut self, view: &GameStateView) {
        println!("Game over, {}.", view.player_name());
    }
}
