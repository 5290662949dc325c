//! Catalog of distinct printed cards.
//!
//! Decks hold many copies of the same card. The `CardCatalog` keeps one
//! template per `CardId`, which is what the collection and shop screens
//! need, and refuses two different templates under the same id.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, warn};

use super::template::{Affinity, CardId, CardKind, CardTemplate};
use crate::core::Faction;
use crate::decks::DeckList;

/// Errors raised while building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two templates share an id but differ in their printed attributes.
    #[error("card {id} is defined twice with different attributes")]
    Conflict { id: CardId },
}

/// Distinct card templates, keyed by id.
///
/// ## Example
///
/// ```
/// use lords_of_war::cards::{CardCatalog, CardTemplate};
///
/// let mut catalog = CardCatalog::new();
/// let footman = CardTemplate::new("footman", "Footman", 1).unit(1, 3);
///
/// catalog.register(footman.clone()).unwrap();
/// // Re-registering the same card is fine
/// catalog.register(footman).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(&"footman".into()).unwrap().name, "Footman");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardTemplate>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every distinct card in one faction's deck.
    pub fn from_deck_list(list: &DeckList) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for template in list.templates() {
            catalog.register(template.clone())?;
        }
        Ok(catalog)
    }

    /// Every distinct card across all faction decks.
    pub fn standard() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for faction in Faction::ALL {
            let list = DeckList::for_faction(faction);
            for template in list.templates() {
                catalog.register(template.clone())?;
            }
        }
        debug!(cards = catalog.len(), "built standard card catalog");
        Ok(catalog)
    }

    /// Register a template.
    ///
    /// Registering an identical template again is a no-op. A different
    /// template under an existing id is rejected and the catalog keeps
    /// the first one.
    pub fn register(&mut self, template: CardTemplate) -> Result<(), CatalogError> {
        match self.cards.get(&template.id) {
            Some(existing) if *existing == template => Ok(()),
            Some(_) => {
                warn!(card = %template.id, "conflicting card definition");
                Err(CatalogError::Conflict { id: template.id })
            }
            None => {
                self.cards.insert(template.id.clone(), template);
                Ok(())
            }
        }
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardTemplate> {
        self.cards.get(id)
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }

    /// Find cards of a kind. Templates without a kind count as units.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values().filter(move |c| c.resolved_kind() == kind)
    }

    /// Find cards by printed faction; `None` finds universal cards.
    pub fn find_by_affinity(
        &self,
        affinity: Option<Affinity>,
    ) -> impl Iterator<Item = &CardTemplate> {
        self.cards
            .values()
            .filter(move |c| c.faction_affinity == affinity)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardTemplate>
    where
        F: Fn(&CardTemplate) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
