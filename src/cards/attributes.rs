//! Kind-specific card attributes.
//!
//! Units carry `power` and `durability`, equipment carries `equipSlot` and
//! `armorValue` or `attackPower`, abilities carry effect parameters such as
//! `damageAmount`, `drawCards`, `needsTarget`, `targetType` and
//! `effectType`. The deck assembler copies this bag verbatim; only the
//! match engine interprets it.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (power, durability, damage)
//! - `Bool`: Flags (needsTarget)
//! - `Text`: Strings (equipSlot, targetType, effectType)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Well-known attribute keys, spelled as the game client spells them.
pub mod keys {
    pub const POWER: &str = "power";
    pub const DURABILITY: &str = "durability";
    pub const EQUIP_SLOT: &str = "equipSlot";
    pub const ARMOR_VALUE: &str = "armorValue";
    pub const ATTACK_POWER: &str = "attackPower";
    pub const DAMAGE_AMOUNT: &str = "damageAmount";
    pub const DRAW_CARDS: &str = "drawCards";
    pub const NEEDS_TARGET: &str = "needsTarget";
    pub const TARGET_TYPE: &str = "targetType";
    pub const EFFECT_TYPE: &str = "effectType";
    pub const POWER_BONUS: &str = "powerBonus";
    pub const DURABILITY_BONUS: &str = "durabilityBonus";
}

/// Key for accessing card attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for a card attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Integer value (power, durability, damageAmount).
    Int(i64),
    /// Boolean flag (needsTarget).
    Bool(bool),
    /// Text value (equipSlot, targetType).
    Text(String),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
