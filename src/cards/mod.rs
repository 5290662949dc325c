//! Card model: printed templates, normalized deck entries, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier shared by every copy of a printed card
//! - `CardTemplate`: A printed card, exactly as written in the roster
//! - `DeckEntry`: One normalized physical copy, as it enters a deck
//! - `Keywords`: Normalized keyword set
//! - `CardCatalog`: One template per id, across decks
//!
//! ## Universal Cards
//!
//! Cards with no `faction_affinity` are universal and appear in every
//! faction's deck.

pub mod attributes;
pub mod catalog;
pub mod entry;
pub mod keywords;
pub mod template;

pub use attributes::{keys, AttributeKey, AttributeValue, Attributes};
pub use catalog::{CardCatalog, CatalogError};
pub use entry::DeckEntry;
pub use keywords::{KeywordField, Keywords};
pub use template::{Affinity, CardId, CardKind, CardTemplate};
