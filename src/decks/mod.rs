//! Faction decks: the roster tables and the assembler that expands them.
//!
//! ## Key Types
//!
//! - `DeckGroup`: The five groups a deck is laid out in
//! - `DeckList`: A faction's `(template, copies)` table
//! - `RosterError`: Content defects found by `DeckList::validate`
//!
//! ## Assembly
//!
//! - `build_deck`: Faction id string to a fresh 60-card deck
//! - `build_faction_deck`: Same, for a parsed `Faction`
//! - `shuffled_deck`: Assemble and shuffle with a seeded `DeckRng`

pub mod assembler;
pub mod group;
pub mod list;
pub mod query;
pub mod roster;

pub use assembler::{build_deck, build_faction_deck, shuffled_deck};
pub use group::{DeckGroup, DECK_SIZE};
pub use list::{DeckList, GroupList, RosterError, RosterLine};
pub use query::{copies_of, copy_counts, total_cost};
