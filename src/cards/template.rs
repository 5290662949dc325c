//! Card templates - the printed cards.
//!
//! A `CardTemplate` describes one printed card: "Skirmisher" costs 1 and
//! is a 1/2 unit. Every physical copy in a deck shares the template's
//! `id`. Templates are fixed game content and are never mutated at runtime;
//! the copies that go into a deck are `DeckEntry` values.

use serde::{Deserialize, Serialize};

use super::attributes::{keys, AttributeKey, AttributeValue, Attributes};
use super::keywords::KeywordField;

/// Stable identifier of a printed card (e.g. `"skirmisher"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    /// A bannerman placed on the field.
    #[default]
    Unit,
    /// A one-shot effect.
    Ability,
    /// Gear attached to a unit.
    Equipment,
}

/// Faction printed on a card. Universal cards have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Affinity {
    Ranged,
    Infantry,
    Cavalry,
    /// Siege engines, shared by every faction's deck.
    Siege,
}

/// A printed card.
///
/// `kind` and `keywords` are kept exactly as written, so a template can
/// leave its kind unspecified or spell a single keyword as a bare tag.
/// Both are resolved when the card is turned into a deck entry.
///
/// ## Example
///
/// ```
/// use lords_of_war::cards::{Affinity, CardKind, CardTemplate};
///
/// let scout = CardTemplate::new("scout", "Scout", 1)
///     .affinity(Affinity::Ranged)
///     .keywords("scout")
///     .unit(1, 1);
///
/// assert_eq!(scout.kind, None);
/// assert_eq!(scout.resolved_kind(), CardKind::Unit);
/// assert_eq!(scout.get_int("power", 0), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplate {
    /// Shared by all copies of this card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Card kind, `None` meaning unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CardKind>,

    /// Resource price.
    pub cost: u32,

    /// Faction printed on the card, `None` for universal cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_affinity: Option<Affinity>,

    /// Rules text.
    #[serde(default)]
    pub description_text: String,

    /// Keywords as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordField>,

    /// Kind-specific attributes.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl CardTemplate {
    /// Create a template with no kind, affinity, keywords or attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            kind: None,
            cost,
            faction_affinity: None,
            description_text: String::new(),
            keywords: None,
            attributes: Attributes::default(),
        }
    }

    /// Set the kind explicitly.
    #[must_use]
    pub fn kind(mut self, kind: CardKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the printed faction.
    #[must_use]
    pub fn affinity(mut self, affinity: impl Into<Affinity>) -> Self {
        self.faction_affinity = Some(affinity.into());
        self
    }

    /// Set the rules text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.description_text = text.into();
        self
    }

    /// Set keywords, either a bare tag or an array of tags.
    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<KeywordField>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Unit stats. Does not set `kind`; units may leave it implicit.
    #[must_use]
    pub fn unit(self, power: i64, durability: i64) -> Self {
        self.with_attr(keys::POWER, power)
            .with_attr(keys::DURABILITY, durability)
    }

    /// Mark as equipment for the given slot.
    #[must_use]
    pub fn equipment(self, slot: &str) -> Self {
        self.kind(CardKind::Equipment).with_attr(keys::EQUIP_SLOT, slot)
    }

    /// Mark as an ability with the given effect type.
    #[must_use]
    pub fn ability(self, effect_type: &str) -> Self {
        self.kind(CardKind::Ability)
            .with_attr(keys::EFFECT_TYPE, effect_type)
    }

    /// Require a target of the given type.
    #[must_use]
    pub fn targets(self, target_type: &str) -> Self {
        self.with_attr(keys::NEEDS_TARGET, true)
            .with_attr(keys::TARGET_TYPE, target_type)
    }

    /// Damage dealt by an ability.
    #[must_use]
    pub fn damage(self, amount: i64) -> Self {
        self.with_attr(keys::DAMAGE_AMOUNT, amount)
    }

    /// Cards drawn by an ability or equipment.
    #[must_use]
    pub fn draws(self, cards: i64) -> Self {
        self.with_attr(keys::DRAW_CARDS, cards)
    }

    /// Armor granted by equipment.
    #[must_use]
    pub fn armor(self, value: i64) -> Self {
        self.with_attr(keys::ARMOR_VALUE, value)
    }

    /// Attack granted by equipment.
    #[must_use]
    pub fn attack(self, value: i64) -> Self {
        self.with_attr(keys::ATTACK_POWER, value)
    }

    /// The kind, defaulting to unit.
    #[must_use]
    pub fn resolved_kind(&self) -> CardKind {
        self.kind.unwrap_or_default()
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key)
            .and_then(AttributeValue::as_int)
            .unwrap_or(default)
    }

    /// Get a boolean attribute with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_attr(key)
            .and_then(AttributeValue::as_bool)
            .unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(AttributeValue::as_text)
    }
}
