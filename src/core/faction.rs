//! Playable factions.
//!
//! A faction is one of the three card archetypes a player can pick when a
//! multiplayer match starts. Each faction owns a fixed 60-card roster.
//! Siege and universal cards are shared by all factions and are not
//! factions themselves.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Affinity;

/// A playable faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Faction {
    /// Archers, crossbows and scouts.
    Ranged,
    /// Footmen, pikes and shield walls.
    Infantry,
    /// Riders, lancers and charges.
    Cavalry,
}

impl Faction {
    /// Every playable faction, in menu order.
    pub const ALL: [Faction; 3] = [Faction::Ranged, Faction::Infantry, Faction::Cavalry];

    /// The identifier used by the client and the match-setup routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Faction::Ranged => "ranged",
            Faction::Infantry => "infantry",
            Faction::Cavalry => "cavalry",
        }
    }

    /// The card affinity printed on this faction's own cards.
    #[must_use]
    pub const fn affinity(self) -> Affinity {
        match self {
            Faction::Ranged => Affinity::Ranged,
            Faction::Infantry => Affinity::Infantry,
            Faction::Cavalry => Affinity::Cavalry,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a playable faction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown faction {input:?} (expected one of: ranged, infantry, cavalry)")]
pub struct ParseFactionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Faction {
    type Err = ParseFactionError;

    /// Parse a faction identifier. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::ALL
            .into_iter()
            .find(|faction| faction.as_str() == s)
            .ok_or_else(|| ParseFactionError { input: s.to_string() })
    }
}

impl From<Faction> for Affinity {
    fn from(faction: Faction) -> Self {
        faction.affinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_factions() {
        assert_eq!("ranged".parse::<Faction>(), Ok(Faction::Ranged));
        assert_eq!("infantry".parse::<Faction>(), Ok(Faction::Infantry));
        assert_eq!("cavalry".parse::<Faction>(), Ok(Faction::Cavalry));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Ranged".parse::<Faction>().unwrap_err();
        assert_eq!(err.input, "Ranged");
    }

    #[test]
    fn test_parse_rejects_empty_and_siege() {
        assert!("".parse::<Faction>().is_err());
        // Siege is a card affinity, not a playable faction
        assert!("siege".parse::<Faction>().is_err());
    }

    #[test]
    fn test_display_matches_identifier() {
        for faction in Faction::ALL {
            assert_eq!(faction.to_string(), faction.as_str());
        }
    }

    #[test]
    fn test_error_message_names_input() {
        let err = "archers".parse::<Faction>().unwrap_err();
        assert!(err.to_string().contains("\"archers\""));
    }

    #[test]
    fn test_affinity() {
        assert_eq!(Affinity::from(Faction::Cavalry), Affinity::Cavalry);
        assert_eq!(Faction::Ranged.affinity(), Affinity::Ranged);
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&Faction::Infantry).unwrap();
        assert_eq!(json, "\"infantry\"");
        let back: Faction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Faction::Infantry);
    }
}
