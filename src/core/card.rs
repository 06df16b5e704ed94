//! Card catalog: every card kind with its cost, type tags, and static data
//!
//! Cards are value-equal copies; the same kind may have many physical
//! copies in play at once. Per-kind behavior (the effect run when an
//! Action card is played) lives in `game::effects`, dispatched by
//! exhaustive match over this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tags a card can carry (a card can have several)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Treasure,
    Victory,
    Action,
    Attack,
    Reaction,
    Curse,
}

/// A card kind. One enum variant per distinct card in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    // Basic treasures
    Copper,
    Silver,
    Gold,
    // Basic victory cards and Curse
    Estate,
    Duchy,
    Province,
    Curse,
    // Base-set kingdom cards
    Gardens,
    Chapel,
    Moat,
    Village,
    Woodcutter,
    Smithy,
    Militia,
    Market,
    Laboratory,
    Festival,
    CouncilRoom,
    Witch,
}

impl Card {
    /// Every card kind, in catalog order.
    pub const ALL: [Card; 19] = [
        Card::Copper,
        Card::Silver,
        Card::Gold,
        Card::Estate,
        Card::Duchy,
        Card::Province,
        Card::Curse,
        Card::Gardens,
        Card::Chapel,
        Card::Moat,
        Card::Village,
        Card::Woodcutter,
        Card::Smithy,
        Card::Militia,
        Card::Market,
        Card::Laboratory,
        Card::Festival,
        Card::CouncilRoom,
        Card::Witch,
    ];

    /// Unique display name, the sole identity key for supply lookup.
    pub fn name(self) -> &'static str {
        match self {
            Card::Copper => "Copper",
            Card::Silver => "Silver",
            Card::Gold => "Gold",
            Card::Estate => "Estate",
            Card::Duchy => "Duchy",
            Card::Province => "Province",
            Card::Curse => "Curse",
            Card::Gardens => "Gardens",
            Card::Chapel => "Chapel",
            Card::Moat => "Moat",
            Card::Village => "Village",
            Card::Woodcutter => "Woodcutter",
            Card::Smithy => "Smithy",
            Card::Militia => "Militia",
            Card::Market => "Market",
            Card::Laboratory => "Laboratory",
            Card::Festival => "Festival",
            Card::CouncilRoom => "Council Room",
            Card::Witch => "Witch",
        }
    }

    /// Purchase cost in coins.
    pub fn cost(self) -> u32 {
        match self {
            Card::Copper => 0,
            Card::Curse => 0,
            Card::Estate => 2,
            Card::Chapel => 2,
            Card::Moat => 2,
            Card::Silver => 3,
            Card::Village => 3,
            Card::Woodcutter => 3,
            Card::Gardens => 4,
            Card::Smithy => 4,
            Card::Militia => 4,
            Card::Duchy => 5,
            Card::Market => 5,
            Card::Laboratory => 5,
            Card::Festival => 5,
            Card::CouncilRoom => 5,
            Card::Witch => 5,
            Card::Gold => 6,
            Card::Province => 8,
        }
    }

    /// Type tags. Always non-empty.
    pub fn types(self) -> &'static [CardType] {
        use CardType::*;
        match self {
            Card::Copper | Card::Silver | Card::Gold => &[Treasure],
            Card::Estate | Card::Duchy | Card::Province | Card::Gardens => &[Victory],
            Card::Curse => &[Curse],
            Card::Chapel
            | Card::Village
            | Card::Woodcutter
            | Card::Smithy
            | Card::Market
            | Card::Laboratory
            | Card::Festival
            | Card::CouncilRoom => &[Action],
            Card::Militia | Card::Witch => &[Action, Attack],
            Card::Moat => &[Action, Reaction],
        }
    }

    pub fn is_type(self, card_type: CardType) -> bool {
        self.types().contains(&card_type)
    }

    pub fn is_action(self) -> bool {
        self.is_type(CardType::Action)
    }

    pub fn is_treasure(self) -> bool {
        self.is_type(CardType::Treasure)
    }

    pub fn is_attack(self) -> bool {
        self.is_type(CardType::Attack)
    }

    pub fn is_reaction(self) -> bool {
        self.is_type(CardType::Reaction)
    }

    /// Coins added when this card is played during the Buy phase.
    pub fn treasure_value(self) -> u32 {
        match self {
            Card::Copper => 1,
            Card::Silver => 2,
            Card::Gold => 3,
            _ => 0,
        }
    }

    /// Victory points at match end. Gardens scales with the total number
    /// of cards its owner holds.
    pub fn victory_points(self, total_cards: usize) -> i32 {
        match self {
            Card::Estate => 1,
            Card::Duchy => 3,
            Card::Province => 6,
            Card::Curse => -1,
            Card::Gardens => (total_cards / 10) as i32,
            _ => 0,
        }
    }

    /// Look up a card kind by its display name.
    pub fn from_name(name: &str) -> Option<Card> {
        Card::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
