//! Keyword tags ("siege", "charge", "scout", ...).
//!
//! Card templates may write their keywords either as a single tag or as a
//! set of tags. `KeywordField` keeps that raw form. Entries that go into a
//! deck always carry a `Keywords` set instead, see
//! [`DeckEntry::from_template`](super::DeckEntry::from_template).

use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;

/// Keywords as written on a card template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordField {
    /// A single bare tag.
    One(String),
    /// Already a set of tags.
    Many(Vec<String>),
}

impl KeywordField {
    /// Normalize into a set. A bare tag becomes a one-element set, a set
    /// is carried over in the same order.
    ///
    /// A `Many` list that repeats a tag collapses to one copy of it. Roster
    /// lists never do; `DeckList::validate` rejects repeated tags.
    #[must_use]
    pub fn to_keywords(&self) -> Keywords {
        match self {
            KeywordField::One(tag) => Keywords::single(tag.clone()),
            KeywordField::Many(tags) => tags.iter().cloned().collect(),
        }
    }

    /// The first tag a `Many` list writes more than once.
    #[must_use]
    pub fn repeated_tag(&self) -> Option<&str> {
        match self {
            KeywordField::One(_) => None,
            KeywordField::Many(tags) => tags
                .iter()
                .enumerate()
                .find(|(i, tag)| tags[..*i].contains(*tag))
                .map(|(_, tag)| tag.as_str()),
        }
    }
}

impl From<&str> for KeywordField {
    fn from(tag: &str) -> Self {
        KeywordField::One(tag.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for KeywordField {
    fn from(tags: [&str; N]) -> Self {
        KeywordField::Many(tags.iter().map(|t| (*t).to_string()).collect())
    }
}

/// A set of keyword tags, kept in the order they were first written.
///
/// Cards carry at most a couple of tags, so this is a small inline vector
/// with set semantics rather than a hash set.
///
/// Deserialization goes through `insert`, so a repeated tag in the input
/// is dropped rather than stored twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Keywords(SmallVec<[String; 2]>);

impl Serialize for Keywords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl From<Vec<String>> for Keywords {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl Keywords {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly one tag.
    #[must_use]
    pub fn single(tag: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(tag);
        set
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Check whether a tag is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
