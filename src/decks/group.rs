//! The five groups a deck is composed of.

use serde::{Deserialize, Serialize};

/// A deck group. Decks are laid out group by group in `ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeckGroup {
    Units,
    Abilities,
    Equipment,
    /// Siege engines shared by all factions.
    Siege,
    /// Faction-agnostic cards shared by all factions.
    Universal,
}

impl DeckGroup {
    /// Every group, in deck order.
    pub const ALL: [DeckGroup; 5] = [
        DeckGroup::Units,
        DeckGroup::Abilities,
        DeckGroup::Equipment,
        DeckGroup::Siege,
        DeckGroup::Universal,
    ];

    /// Number of cards this group contributes to every faction deck.
    #[must_use]
    pub const fn expected_size(self) -> usize {
        match self {
            DeckGroup::Units => 24,
            DeckGroup::Abilities => 20,
            DeckGroup::Equipment => 8,
            DeckGroup::Siege => 6,
            DeckGroup::Universal => 2,
        }
    }

    /// Group name for logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeckGroup::Units => "units",
            DeckGroup::Abilities => "abilities",
            DeckGroup::Equipment => "equipment",
            DeckGroup::Siege => "siege",
            DeckGroup::Universal => "universal",
        }
    }
}

impl std::fmt::Display for DeckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of every faction deck.
pub const DECK_SIZE: usize = 60;
