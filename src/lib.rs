//! # lords-of-war
//!
//! Deck assembly for the Lords of War multiplayer card game.
//!
//! Each playable faction (ranged, infantry, cavalry) owns a fixed 60-card
//! deck. Match setup asks for a deck by faction id and gets back a fresh,
//! caller-owned list of normalized cards.
//!
//! ```
//! use lords_of_war::build_deck;
//!
//! let deck = build_deck("ranged");
//! assert_eq!(deck.len(), 60);
//! assert_eq!(deck[0].id.as_str(), "skirmisher");
//!
//! // Unknown factions are not an error, just an empty deck
//! assert!(build_deck("pirates").is_empty());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Content as Data**: Each deck is a `(template, copies)` table per
//!    group. Copy counts and group sizes are auditable and validated in
//!    tests, not at call time.
//!
//! 2. **One Normalization Point**: Every card enters a deck through
//!    `DeckEntry::from_template`, which resolves the default kind and
//!    turns a bare keyword into a one-element set.
//!
//! 3. **Pure Assembly**: No caches, no shared state, no I/O. Every call
//!    returns independent entries.
//!
//! ## Modules
//!
//! - `core`: Factions and seeded shuffling
//! - `cards`: Templates, deck entries, keywords, attributes, catalog
//! - `decks`: Deck groups, roster tables, validation and the assembler

pub mod core;
pub mod cards;
pub mod decks;

// Re-export commonly used types
pub use crate::core::{DeckRng, DeckRngState, Faction, ParseFactionError};

pub use crate::cards::{
    Affinity, AttributeKey, AttributeValue, Attributes, CardCatalog, CardId, CardKind,
    CardTemplate, CatalogError, DeckEntry, KeywordField, Keywords,
};

pub use crate::decks::{
    build_deck, build_faction_deck, shuffled_deck, DeckGroup, DeckList, GroupList, RosterError,
    RosterLine, DECK_SIZE,
};
