//! Deck entries - the physical copies that make up a deck.
//!
//! A `DeckEntry` is a normalized copy of a `CardTemplate`. Normalization
//! does two things and nothing else:
//!
//! - `kind` is resolved, defaulting to unit.
//! - `keywords` written as a bare tag becomes a one-element set. A set is
//!   carried over unchanged, and a template without keywords produces an
//!   entry without keywords (not an empty set).
//!
//! Several entries with the same `id` are copies of the same printed card.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use super::keywords::Keywords;
use super::template::{Affinity, CardId, CardKind, CardTemplate};

/// One physical card in a deck.
///
/// Entries are owned by whoever asked for the deck; nothing else holds a
/// reference to them, so callers are free to shuffle, reorder or mutate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    /// Shared by all copies of the printed card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Resolved card kind.
    pub kind: CardKind,

    /// Resource price.
    pub cost: u32,

    /// Printed faction, `None` for universal cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_affinity: Option<Affinity>,

    /// Rules text.
    #[serde(default)]
    pub description_text: String,

    /// Keyword set, `None` when the card has no keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,

    /// Kind-specific attributes, copied verbatim from the template.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl DeckEntry {
    /// Materialize one copy of a template.
    #[must_use]
    pub fn from_template(template: &CardTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            kind: template.resolved_kind(),
            cost: template.cost,
            faction_affinity: template.faction_affinity,
            description_text: template.description_text.clone(),
            keywords: template.keywords.as_ref().map(|k| k.to_keywords()),
            attributes: template.attributes.clone(),
        }
    }

    /// Check for a keyword.
    #[must_use]
    pub fn has_keyword(&self, tag: &str) -> bool {
        self.keywords.as_ref().is_some_and(|k| k.contains(tag))
    }

    /// Check whether this is a universal (faction-agnostic) card.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.faction_affinity.is_none()
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

impl From<&CardTemplate> for DeckEntry {
    fn from(template: &CardTemplate) -> Self {
        Self::from_template(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::attributes::keys;

    #[test]
    fn test_kind_default_applied() {
        let entry = DeckEntry::from_template(&CardTemplate::new("catapult", "Catapult", 5));
        assert_eq!(entry.kind, CardKind::Unit);

        let ability = CardTemplate::new("quickDraw", "Quick Draw", 1).ability("draw");
        assert_eq!(DeckEntry::from_template(&ability).kind, CardKind::Ability);
    }

    #[test]
    fn test_bare_keyword_wrapped() {
        let template = CardTemplate::new("scout", "Scout", 1).keywords("scout");
        let entry = DeckEntry::from_template(&template);

        assert_eq!(entry.keywords, Some(Keywords::single("scout")));
        assert!(entry.has_keyword("scout"));
    }

    #[test]
    fn test_keyword_set_unchanged() {
        let template = CardTemplate::new("halberdier", "Halberdier", 3).keywords(["pike", "guard"]);
        let entry = DeckEntry::from_template(&template);

        let tags: Vec<_> = entry.keywords.as_ref().unwrap().iter().collect();
        assert_eq!(tags, vec!["pike", "guard"]);
    }

    #[test]
    fn test_missing_keywords_stay_missing() {
        let template = CardTemplate::new("skirmisher", "Skirmisher", 1).unit(1, 2);
        let entry = DeckEntry::from_template(&template);

        assert!(entry.keywords.is_none());
        assert!(!entry.has_keyword("scout"));
    }

    #[test]
    fn test_attributes_copied() {
        let template = CardTemplate::new("volleyFire", "Volley Fire", 2)
            .affinity(Affinity::Ranged)
            .text("Deal 2 damage to a target bannerman.")
            .ability("damage")
            .targets("enemyUnit")
            .damage(2);
        let entry = DeckEntry::from(&template);

        assert_eq!(entry.id, template.id);
        assert_eq!(entry.name, "Volley Fire");
        assert_eq!(entry.cost, 2);
        assert_eq!(entry.faction_affinity, Some(Affinity::Ranged));
        assert_eq!(entry.description_text, template.description_text);
        assert_eq!(entry.get_int(keys::DAMAGE_AMOUNT, 0), 2);
        assert!(entry.get_bool(keys::NEEDS_TARGET, false));
        assert_eq!(entry.get_text(keys::TARGET_TYPE), Some("enemyUnit"));
        assert!(!entry.is_universal());
    }

    #[test]
    fn test_copies_are_independent() {
        let template = CardTemplate::new("footman", "Footman", 1).unit(1, 3);
        let mut first = DeckEntry::from_template(&template);
        let second = DeckEntry::from_template(&template);

        first.cost = 9;
        first.attributes.insert(keys::POWER.into(), 5i64.into());

        assert_eq!(second.cost, 1);
        assert_eq!(second.get_int(keys::POWER, 0), 1);
        assert_eq!(template.get_int(keys::POWER, 0), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let template = CardTemplate::new("lancer", "Lancer", 3)
            .affinity(Affinity::Cavalry)
            .keywords("charge")
            .unit(3, 3);
        let entry = DeckEntry::from_template(&template);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "unit");
        assert_eq!(json["keywords"], serde_json::json!(["charge"]));
        assert_eq!(json["durability"], 3);

        let back: DeckEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let entry = DeckEntry::from_template(
            &CardTemplate::new("reinforcements", "Reinforcements", 3).ability("draw"),
        );
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json.get("keywords").is_none());
        assert!(json.get("factionAffinity").is_none());
    }

    #[test]
    fn test_json_keywords_stay_a_set() {
        let json = r#"{
            "id": "catapult",
            "name": "Catapult",
            "kind": "unit",
            "cost": 5,
            "factionAffinity": "siege",
            "keywords": ["siege", "siege", "ranged"],
            "power": 4
        }"#;
        let entry: DeckEntry = serde_json::from_str(json).unwrap();

        let keywords = entry.keywords.as_ref().unwrap();
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["siege", "ranged"]);
        assert_eq!(entry.get_int(keys::POWER, 0), 4);
    }
}
