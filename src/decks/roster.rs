//! Card content for every faction deck.
//!
//! Each faction contributes its own units, abilities and equipment; the
//! siege and universal groups are shared. Copy counts live next to the
//! card they apply to. Group sizes are checked by `DeckList::validate`.

use super::group::DeckGroup;
use super::list::GroupList;
use crate::cards::{keys, Affinity, CardKind, CardTemplate};

/// Units, abilities and equipment of the ranged faction.
pub fn ranged() -> (GroupList, GroupList, GroupList) {
    let aff = Affinity::Ranged;

    let units = GroupList::new(DeckGroup::Units)
        .with(
            CardTemplate::new("skirmisher", "Skirmisher", 1)
                .affinity(aff)
                .text("A lightly armed bannerman who harasses the enemy line.")
                .unit(1, 2),
            4,
        )
        .with(
            CardTemplate::new("longbowman", "Longbowman", 2)
                .affinity(aff)
                .text("Can attack bannermen in the back row.")
                .keywords(["ranged", "volley"])
                .unit(2, 2),
            4,
        )
        .with(
            CardTemplate::new("crossbowman", "Crossbowman", 3)
                .affinity(aff)
                .text("Slow to reload, but its bolts pierce armor.")
                .keywords("pierce")
                .unit(3, 3),
            3,
        )
        .with(
            CardTemplate::new("javelineer", "Javelineer", 2)
                .affinity(aff)
                .text("Deals 1 damage to an enemy bannerman when played.")
                .unit(2, 1),
            3,
        )
        .with(
            CardTemplate::new("scout", "Scout", 1)
                .affinity(aff)
                .text("When played, look at the top card of your deck.")
                .keywords("scout")
                .unit(1, 1),
            3,
        )
        .with(
            CardTemplate::new("marksman", "Marksman", 3)
                .affinity(aff)
                .text("Ignores guard when choosing a target.")
                .keywords("precision")
                .unit(3, 2),
            3,
        )
        .with(
            CardTemplate::new("mountedArcher", "Mounted Archer", 3)
                .affinity(aff)
                .text("Strikes first and withdraws before the enemy can answer.")
                .keywords(["charge", "ranged"])
                .unit(2, 3),
            2,
        )
        .with(
            CardTemplate::new("archerCommander", "Archer Commander", 5)
                .affinity(aff)
                .text("Other friendly ranged bannermen get +1 power.")
                .keywords("rally")
                .unit(4, 4),
            2,
        );

    let abilities = GroupList::new(DeckGroup::Abilities)
        .with(
            CardTemplate::new("volleyFire", "Volley Fire", 2)
                .affinity(aff)
                .text("Deal 2 damage to an enemy bannerman.")
                .ability("damage")
                .targets("enemyUnit")
                .damage(2),
            4,
        )
        .with(
            CardTemplate::new("aimedShot", "Aimed Shot", 3)
                .affinity(aff)
                .text("Deal 3 damage to an enemy bannerman.")
                .ability("damage")
                .targets("enemyUnit")
                .damage(3),
            4,
        )
        .with(
            CardTemplate::new("quickDraw", "Quick Draw", 1)
                .affinity(aff)
                .text("Draw 2 cards.")
                .ability("draw")
                .draws(2),
            4,
        )
        .with(
            CardTemplate::new("fireArrows", "Fire Arrows", 4)
                .affinity(aff)
                .text("Deal 1 damage to every enemy bannerman.")
                .ability("damage")
                .damage(1)
                .with_attr(keys::TARGET_TYPE, "allEnemyUnits"),
            3,
        )
        .with(
            CardTemplate::new("camouflage", "Camouflage", 1)
                .affinity(aff)
                .text("A friendly bannerman gets +2 durability.")
                .ability("buff")
                .targets("friendlyUnit")
                .with_attr(keys::DURABILITY_BONUS, 2i64),
            3,
        )
        .with(
            CardTemplate::new("windReading", "Wind Reading", 2)
                .affinity(aff)
                .text("Friendly bannermen get +1 power this turn.")
                .ability("buff")
                .with_attr(keys::TARGET_TYPE, "allFriendlyUnits")
                .with_attr(keys::POWER_BONUS, 1i64),
            2,
        );

    let equipment = GroupList::new(DeckGroup::Equipment)
        .with(
            CardTemplate::new("reinforcedBow", "Reinforced Bow", 2)
                .affinity(aff)
                .text("Equipped bannerman gets +1 attack.")
                .equipment("weapon")
                .attack(1),
            3,
        )
        .with(
            CardTemplate::new("quiverOfPlenty", "Quiver of Plenty", 2)
                .affinity(aff)
                .text("When equipped, draw a card.")
                .equipment("accessory")
                .draws(1),
            2,
        )
        .with(
            CardTemplate::new("leatherJerkin", "Leather Jerkin", 1)
                .affinity(aff)
                .text("Equipped bannerman gets +1 armor.")
                .equipment("armor")
                .armor(1),
            3,
        );

    (units, abilities, equipment)
}

/// Units, abilities and equipment of the infantry faction.
pub fn infantry() -> (GroupList, GroupList, GroupList) {
    let aff = Affinity::Infantry;

    let units = GroupList::new(DeckGroup::Units)
        .with(
            CardTemplate::new("footman", "Footman", 1)
                .affinity(aff)
                .text("The backbone of every army.")
                .unit(1, 3),
            6,
        )
        .with(
            CardTemplate::new("spearman", "Spearman", 2)
                .affinity(aff)
                .text("Deals double damage to charging bannermen.")
                .keywords("pike")
                .unit(2, 3),
            4,
        )
        .with(
            CardTemplate::new("shieldbearer", "Shieldbearer", 2)
                .affinity(aff)
                .text("Enemies must attack this bannerman first.")
                .keywords("guard")
                .unit(1, 5),
            4,
        )
        .with(
            CardTemplate::new("swordsman", "Swordsman", 3)
                .affinity(aff)
                .text("A trained duelist.")
                .unit(3, 3),
            4,
        )
        .with(
            CardTemplate::new("halberdier", "Halberdier", 3)
                .affinity(aff)
                .text("Holds the line against horse and foot alike.")
                .keywords(["pike", "guard"])
                .unit(3, 4),
            3,
        )
        .with(
            CardTemplate::new("veteranSergeant", "Veteran Sergeant", 4)
                .affinity(aff)
                .text("Other friendly infantry bannermen get +1 durability.")
                .keywords("rally")
                .unit(4, 5),
            3,
        );

    let abilities = GroupList::new(DeckGroup::Abilities)
        .with(
            CardTemplate::new("shieldWall", "Shield Wall", 2)
                .affinity(aff)
                .text("Friendly bannermen get +1 durability until your next turn.")
                .ability("buff")
                .with_attr(keys::TARGET_TYPE, "allFriendlyUnits")
                .with_attr(keys::DURABILITY_BONUS, 1i64),
            4,
        )
        .with(
            CardTemplate::new("formationMarch", "Formation March", 2)
                .affinity(aff)
                .text("Draw 2 cards.")
                .ability("draw")
                .draws(2),
            4,
        )
        .with(
            CardTemplate::new("battleCry", "Battle Cry", 3)
                .affinity(aff)
                .text("Friendly bannermen get +1 power this turn.")
                .ability("buff")
                .with_attr(keys::TARGET_TYPE, "allFriendlyUnits")
                .with_attr(keys::POWER_BONUS, 1i64),
            4,
        )
        .with(
            CardTemplate::new("holdTheLine", "Hold the Line", 1)
                .affinity(aff)
                .text("A friendly bannerman gets +2 durability.")
                .ability("buff")
                .targets("friendlyUnit")
                .with_attr(keys::DURABILITY_BONUS, 2i64),
            4,
        )
        .with(
            CardTemplate::new("counterCharge", "Counter Charge", 2)
                .affinity(aff)
                .text("Deal 2 damage to an enemy bannerman.")
                .ability("damage")
                .targets("enemyUnit")
                .damage(2),
            4,
        );

    let equipment = GroupList::new(DeckGroup::Equipment)
        .with(
            CardTemplate::new("ironHelm", "Iron Helm", 1)
                .affinity(aff)
                .text("Equipped bannerman gets +1 armor.")
                .equipment("head")
                .armor(1),
            3,
        )
        .with(
            CardTemplate::new("towerShield", "Tower Shield", 2)
                .affinity(aff)
                .text("Equipped bannerman gets +2 armor.")
                .equipment("offhand")
                .armor(2),
            3,
        )
        .with(
            CardTemplate::new("broadsword", "Broadsword", 2)
                .affinity(aff)
                .text("Equipped bannerman gets +2 attack.")
                .equipment("weapon")
                .attack(2),
            2,
        );

    (units, abilities, equipment)
}

/// Units, abilities and equipment of the cavalry faction.
pub fn cavalry() -> (GroupList, GroupList, GroupList) {
    let aff = Affinity::Cavalry;

    let units = GroupList::new(DeckGroup::Units)
        .with(
            CardTemplate::new("lightRider", "Light Rider", 1)
                .affinity(aff)
                .text("Can attack the turn it is played.")
                .keywords("charge")
                .unit(2, 1),
            6,
        )
        .with(
            CardTemplate::new("lancer", "Lancer", 3)
                .affinity(aff)
                .text("Deals +2 damage when it charges.")
                .keywords("charge")
                .unit(3, 3),
            4,
        )
        .with(
            CardTemplate::new("horseArcher", "Horse Archer", 2)
                .affinity(aff)
                .text("Shoots from the saddle.")
                .keywords(["charge", "ranged"])
                .unit(2, 2),
            4,
        )
        .with(
            CardTemplate::new("outrider", "Outrider", 2)
                .affinity(aff)
                .text("When played, look at the top card of your deck.")
                .keywords("scout")
                .unit(1, 2),
            4,
        )
        .with(
            CardTemplate::new("heavyCavalry", "Heavy Cavalry", 4)
                .affinity(aff)
                .text("Tramples through the front row.")
                .keywords("charge")
                .unit(4, 4),
            3,
        )
        .with(
            CardTemplate::new("knightCommander", "Knight Commander", 5)
                .affinity(aff)
                .text("Other friendly cavalry bannermen get +1 power.")
                .keywords(["charge", "rally"])
                .unit(5, 5),
            3,
        );

    let abilities = GroupList::new(DeckGroup::Abilities)
        .with(
            CardTemplate::new("thunderingCharge", "Thundering Charge", 2)
                .affinity(aff)
                .text("A friendly bannerman gets +2 power this turn.")
                .ability("buff")
                .targets("friendlyUnit")
                .with_attr(keys::POWER_BONUS, 2i64),
            4,
        )
        .with(
            CardTemplate::new("flankingManeuver", "Flanking Maneuver", 2)
                .affinity(aff)
                .text("Deal 2 damage to an enemy bannerman.")
                .ability("damage")
                .targets("enemyUnit")
                .damage(2),
            4,
        )
        .with(
            CardTemplate::new("swiftStrike", "Swift Strike", 1)
                .affinity(aff)
                .text("Deal 1 damage to an enemy bannerman. Draw a card.")
                .ability("damage")
                .targets("enemyUnit")
                .damage(1)
                .draws(1),
            4,
        )
        .with(
            CardTemplate::new("freshMounts", "Fresh Mounts", 2)
                .affinity(aff)
                .text("Draw 2 cards.")
                .ability("draw")
                .draws(2),
            4,
        )
        .with(
            CardTemplate::new("tramplingRush", "Trampling Rush", 4)
                .affinity(aff)
                .text("Deal 1 damage to every enemy bannerman.")
                .ability("damage")
                .damage(1)
                .with_attr(keys::TARGET_TYPE, "allEnemyUnits"),
            4,
        );

    let equipment = GroupList::new(DeckGroup::Equipment)
        .with(
            CardTemplate::new("lance", "Lance", 2)
                .affinity(aff)
                .text("Equipped bannerman gets +2 attack.")
                .equipment("weapon")
                .attack(2),
            3,
        )
        .with(
            CardTemplate::new("barding", "Barding", 2)
                .affinity(aff)
                .text("Equipped bannerman gets +2 armor.")
                .equipment("armor")
                .armor(2),
            3,
        )
        .with(
            CardTemplate::new("spurs", "Spurs", 1)
                .affinity(aff)
                .text("Equipped bannerman gets +1 attack.")
                .equipment("accessory")
                .attack(1),
            2,
        );

    (units, abilities, equipment)
}

/// Siege engines, shared by every faction. Their kind is left implicit.
pub fn siege() -> GroupList {
    GroupList::new(DeckGroup::Siege)
        .with(
            CardTemplate::new("batteringRam", "Battering Ram", 4)
                .affinity(Affinity::Siege)
                .text("Deals double damage to fortifications.")
                .keywords("siege")
                .unit(3, 5),
            2,
        )
        .with(
            CardTemplate::new("catapult", "Catapult", 5)
                .affinity(Affinity::Siege)
                .text("Can attack any enemy bannerman.")
                .keywords(["siege", "ranged"])
                .unit(4, 3),
            2,
        )
        .with(
            CardTemplate::new("siegeTower", "Siege Tower", 4)
                .affinity(Affinity::Siege)
                .text("Friendly bannermen behind it cannot be targeted.")
                .keywords("siege")
                .unit(2, 6),
            2,
        )
}

/// Faction-agnostic cards, one copy each in every deck.
pub fn universal() -> GroupList {
    GroupList::new(DeckGroup::Universal)
        .with(
            CardTemplate::new("reinforcements", "Reinforcements", 3)
                .text("Draw 2 cards.")
                .ability("draw")
                .draws(2),
            1,
        )
        .with(
            CardTemplate::new("tacticalRetreat", "Tactical Retreat", 1)
                .kind(CardKind::Ability)
                .text("Return a friendly bannerman to your hand.")
                .with_attr(keys::EFFECT_TYPE, "returnToHand")
                .targets("friendlyUnit"),
            1,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::KeywordField;

    #[test]
    fn test_faction_group_sizes() {
        for (units, abilities, equipment) in [ranged(), infantry(), cavalry()] {
            assert_eq!(units.size(), 24);
            assert_eq!(abilities.size(), 20);
            assert_eq!(equipment.size(), 8);
        }
        assert_eq!(siege().size(), 6);
        assert_eq!(universal().size(), 2);
    }

    #[test]
    fn test_group_kinds() {
        for (units, abilities, equipment) in [ranged(), infantry(), cavalry()] {
            assert!(units.lines.iter().all(|l| l.template.resolved_kind() == CardKind::Unit));
            assert!(abilities
                .lines
                .iter()
                .all(|l| l.template.resolved_kind() == CardKind::Ability));
            assert!(equipment
                .lines
                .iter()
                .all(|l| l.template.resolved_kind() == CardKind::Equipment));
        }
    }

    #[test]
    fn test_siege_leaves_kind_implicit() {
        for line in siege().lines {
            assert_eq!(line.template.kind, None);
            assert_eq!(line.template.faction_affinity, Some(Affinity::Siege));
        }
    }

    #[test]
    fn test_universal_has_no_affinity() {
        for line in universal().lines {
            assert_eq!(line.template.faction_affinity, None);
            assert_eq!(line.copies, 1);
        }
    }

    #[test]
    fn test_scout_keyword_is_bare() {
        let (units, _, _) = ranged();
        let scout = units
            .lines
            .iter()
            .find(|l| l.template.id.as_str() == "scout")
            .unwrap();
        assert_eq!(scout.template.keywords, Some(KeywordField::One("scout".to_string())));
    }
}
