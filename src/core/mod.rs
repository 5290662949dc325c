//! Core types shared by the card model and the deck assembler:
//! factions and seeded shuffling.

pub mod faction;
pub mod rng;

pub use faction::{Faction, ParseFactionError};
pub use rng::{DeckRng, DeckRngState};
