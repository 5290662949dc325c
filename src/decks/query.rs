//! Multiset queries over an assembled deck.

use rustc_hash::FxHashMap;

use crate::cards::{CardId, DeckEntry};

/// Number of copies of a card in the deck.
#[must_use]
pub fn copies_of(deck: &[DeckEntry], id: &CardId) -> usize {
    deck.iter().filter(|entry| entry.id == *id).count()
}

/// Copies of every card in the deck, keyed by id.
#[must_use]
pub fn copy_counts(deck: &[DeckEntry]) -> FxHashMap<CardId, usize> {
    let mut counts = FxHashMap::default();
    for entry in deck {
        *counts.entry(entry.id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Sum of all card costs.
#[must_use]
pub fn total_cost(deck: &[DeckEntry]) -> u64 {
    deck.iter().map(|entry| u64::from(entry.cost)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;

    fn deck() -> Vec<DeckEntry> {
        let footman = CardTemplate::new("footman", "Footman", 1).unit(1, 3);
        let helm = CardTemplate::new("ironHelm", "Iron Helm", 2).equipment("head");
        vec![
            DeckEntry::from_template(&footman),
            DeckEntry::from_template(&helm),
            DeckEntry::from_template(&footman),
        ]
    }

    #[test]
    fn test_copies_of() {
        let deck = deck();
        assert_eq!(copies_of(&deck, &"footman".into()), 2);
        assert_eq!(copies_of(&deck, &"ironHelm".into()), 1);
        assert_eq!(copies_of(&deck, &"lancer".into()), 0);
    }

    #[test]
    fn test_copy_counts() {
        let counts = copy_counts(&deck());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&CardId::new("footman")], 2);
    }

    #[test]
    fn test_total_cost() {
        assert_eq!(total_cost(&deck()), 4);
        assert_eq!(total_cost(&[]), 0);
    }
}
