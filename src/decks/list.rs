//! Declarative deck lists.
//!
//! A `DeckList` is the balance table for one faction: for each group, an
//! ordered list of `(template, copies)` lines. Expanding the list gives the
//! flat deck. Keeping copy counts as data rather than as repeated literals
//! makes the card balance easy to audit and to validate.

use std::ops::Range;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::group::DeckGroup;
use super::roster;
use crate::cards::{CardId, CardTemplate, DeckEntry};
use crate::core::Faction;

/// One line of a deck list: a card and how many copies of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterLine {
    /// The printed card.
    pub template: CardTemplate,
    /// Physical copies of it in the deck.
    pub copies: usize,
}

impl RosterLine {
    /// Create a roster line.
    #[must_use]
    pub fn new(template: CardTemplate, copies: usize) -> Self {
        Self { template, copies }
    }

    /// Expand into `copies` independent entries.
    pub fn entries(&self) -> impl Iterator<Item = DeckEntry> + '_ {
        (0..self.copies).map(move |_| DeckEntry::from_template(&self.template))
    }
}

/// The lines of one deck group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupList {
    /// Which group these lines fill.
    pub group: DeckGroup,
    /// Lines in deck order.
    pub lines: Vec<RosterLine>,
}

impl GroupList {
    /// Create an empty group.
    #[must_use]
    pub fn new(group: DeckGroup) -> Self {
        Self {
            group,
            lines: Vec::new(),
        }
    }

    /// Add a line (builder pattern).
    #[must_use]
    pub fn with(mut self, template: CardTemplate, copies: usize) -> Self {
        self.lines.push(RosterLine::new(template, copies));
        self
    }

    /// Total copies in this group.
    #[must_use]
    pub fn size(&self) -> usize {
        self.lines.iter().map(|line| line.copies).sum()
    }
}

/// Defects in a deck list. These are content bugs, found by tests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("{faction} deck groups are {found:?}, expected units, abilities, equipment, siege, universal")]
    Layout {
        faction: Faction,
        found: Vec<DeckGroup>,
    },

    #[error("{faction} {group} group has {actual} cards, expected {expected}")]
    GroupSize {
        faction: Faction,
        group: DeckGroup,
        expected: usize,
        actual: usize,
    },

    #[error("{faction} {group} group lists card {id} with zero copies")]
    EmptyLine {
        faction: Faction,
        group: DeckGroup,
        id: CardId,
    },

    #[error("{faction} deck lists keyword {keyword:?} twice on card {id}")]
    RepeatedKeyword {
        faction: Faction,
        id: CardId,
        keyword: String,
    },

    #[error("{faction} deck defines card {id} twice with different attributes")]
    Conflict { faction: Faction, id: CardId },
}

/// A faction's full deck list, groups in deck order.
///
/// ## Example
///
/// ```
/// use lords_of_war::core::Faction;
/// use lords_of_war::decks::{DeckGroup, DeckList};
///
/// let list = DeckList::for_faction(Faction::Ranged);
/// assert!(list.validate().is_ok());
/// assert_eq!(list.len(), 60);
/// assert_eq!(list.group_size(DeckGroup::Units), 24);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    /// Faction the deck belongs to.
    pub faction: Faction,
    /// One entry per group, in `DeckGroup::ALL` order.
    pub groups: Vec<GroupList>,
}

impl DeckList {
    /// The fixed deck list of a faction.
    #[must_use]
    pub fn for_faction(faction: Faction) -> Self {
        let (units, abilities, equipment) = match faction {
            Faction::Ranged => roster::ranged(),
            Faction::Infantry => roster::infantry(),
            Faction::Cavalry => roster::cavalry(),
        };
        Self {
            faction,
            groups: vec![units, abilities, equipment, roster::siege(), roster::universal()],
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(GroupList::size).sum()
    }

    /// Check whether the list has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The lines of one group, if present.
    #[must_use]
    pub fn group(&self, group: DeckGroup) -> Option<&GroupList> {
        self.groups.iter().find(|g| g.group == group)
    }

    /// Number of cards in one group.
    #[must_use]
    pub fn group_size(&self, group: DeckGroup) -> usize {
        self.group(group).map_or(0, GroupList::size)
    }

    /// Positions a group occupies in the expanded deck.
    #[must_use]
    pub fn group_range(&self, group: DeckGroup) -> Range<usize> {
        let mut start = 0;
        for g in &self.groups {
            let size = g.size();
            if g.group == group {
                return start..start + size;
            }
            start += size;
        }
        start..start
    }

    /// Every line, in deck order.
    pub fn lines(&self) -> impl Iterator<Item = &RosterLine> {
        self.groups.iter().flat_map(|g| g.lines.iter())
    }

    /// Distinct templates, in order of first appearance.
    pub fn templates(&self) -> impl Iterator<Item = &CardTemplate> {
        let mut seen = FxHashSet::default();
        self.lines()
            .map(|line| &line.template)
            .filter(move |t| seen.insert(&t.id))
    }

    /// Expand into the flat deck. Every entry is a fresh copy.
    #[must_use]
    pub fn expand(&self) -> Vec<DeckEntry> {
        let mut deck = Vec::with_capacity(self.len());
        for line in self.lines() {
            deck.extend(line.entries());
        }
        deck
    }

    /// Check layout, group sizes and template consistency.
    ///
    /// Reports the first defect found: group layout, then group sizes,
    /// then zero-copy lines, then repeated keywords, then conflicting
    /// templates.
    pub fn validate(&self) -> Result<(), RosterError> {
        let found: Vec<DeckGroup> = self.groups.iter().map(|g| g.group).collect();
        if found != DeckGroup::ALL {
            warn!(faction = %self.faction, ?found, "deck groups out of order");
            return Err(RosterError::Layout {
                faction: self.faction,
                found,
            });
        }

        for group in DeckGroup::ALL {
            let actual = self.group_size(group);
            if actual != group.expected_size() {
                warn!(faction = %self.faction, %group, actual, "deck group has wrong size");
                return Err(RosterError::GroupSize {
                    faction: self.faction,
                    group,
                    expected: group.expected_size(),
                    actual,
                });
            }
        }

        for g in &self.groups {
            if let Some(line) = g.lines.iter().find(|line| line.copies == 0) {
                warn!(faction = %self.faction, group = %g.group, card = %line.template.id, "zero-copy line");
                return Err(RosterError::EmptyLine {
                    faction: self.faction,
                    group: g.group,
                    id: line.template.id.clone(),
                });
            }
        }

        for line in self.lines() {
            let template = &line.template;
            if let Some(keyword) = template.keywords.as_ref().and_then(|k| k.repeated_tag()) {
                warn!(faction = %self.faction, card = %template.id, keyword, "repeated keyword");
                return Err(RosterError::RepeatedKeyword {
                    faction: self.faction,
                    id: template.id.clone(),
                    keyword: keyword.to_string(),
                });
            }
        }

        let mut by_id: FxHashMap<&CardId, &CardTemplate> = FxHashMap::default();
        for line in self.lines() {
            let template = &line.template;
            match by_id.get(&template.id) {
                Some(existing) if *existing != template => {
                    warn!(faction = %self.faction, card = %template.id, "conflicting card definition");
                    return Err(RosterError::Conflict {
                        faction: self.faction,
                        id: template.id.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    by_id.insert(&template.id, template);
                }
            }
        }

        Ok(())
    }
}
