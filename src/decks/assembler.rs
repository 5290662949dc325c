//! Deck assembly.
//!
//! `build_deck` is what match setup calls once per player: it takes the
//! faction id chosen in the lobby and returns a fresh 60-card deck in
//! roster order (units, abilities, equipment, siege, universal).
//!
//! Assembly is pure. Nothing is cached and nothing is logged, so it can be
//! called from any number of threads at once.

use std::str::FromStr;

use super::list::DeckList;
use crate::cards::DeckEntry;
use crate::core::{DeckRng, Faction};

/// Build the deck for a faction id.
///
/// An id that is not exactly `"ranged"`, `"infantry"` or `"cavalry"`
/// yields an empty deck rather than an error. Callers that need to reject
/// bad input should parse with [`Faction::from_str`] first.
///
/// ```
/// use lords_of_war::decks::build_deck;
///
/// assert_eq!(build_deck("cavalry").len(), 60);
/// assert!(build_deck("dragons").is_empty());
/// ```
#[must_use]
pub fn build_deck(faction_id: &str) -> Vec<DeckEntry> {
    Faction::from_str(faction_id)
        .map(build_faction_deck)
        .unwrap_or_default()
}

/// Build the deck for an already-parsed faction.
#[must_use]
pub fn build_faction_deck(faction: Faction) -> Vec<DeckEntry> {
    DeckList::for_faction(faction).expand()
}

/// Build a faction's deck and shuffle it for dealing.
#[must_use]
pub fn shuffled_deck(faction: Faction, rng: &mut DeckRng) -> Vec<DeckEntry> {
    let mut deck = build_faction_deck(faction);
    rng.shuffle(&mut deck);
    deck
}
