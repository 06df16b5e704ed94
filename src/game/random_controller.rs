//! Random decision provider for testing and baseline gameplay
//!
//! Picks uniformly among the legal cards plus a pass. Serves as a
//! baseline opponent and keeps full-match tests honest.

use crate::core::Card;
use crate::game::controller::{ChoiceKind, Decision, DecisionProvider, GameStateView};
use rand::Rng;

/// A provider that makes random choices
pub struct RandomController {
    rng: Box<dyn rand::RngCore>,
}

impl RandomController {
    /// Create a new random provider with the thread RNG
    pub fn new() -> Self {
        RandomController {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Create a random provider with a seeded RNG (for deterministic
    /// testing)
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        RandomController {
            rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomController {
    fn default() -> Self {
        RandomController::new()
    }
}

impl DecisionProvider for RandomController {
    fn choose_card(
        &mut self,
        _view: &GameStateView,
        _kind: ChoiceKind,
        legal: &[Card],
    ) -> Decision {
        if legal.is_empty() {
            return Decision::Pass;
        }
        // One extra slot for passing; forced choices get re-asked and
        // terminate because a later roll lands on a card
        let index = self.rng.gen_range(0..=legal.len());
        if index == legal.len() {
            Decision::Pass
        } else {
            Decision::named(legal[index])
        }
    }
}
