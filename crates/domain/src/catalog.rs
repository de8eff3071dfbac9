//! Static consciousness catalog
//!
//! The full in-game consciousness table, embedded at build time. Entries are
//! defined once on first access and never change afterwards; recommendation
//! lists reference them by id only.

use std::sync::OnceLock;

use crate::entities::Consciousness;
use crate::ids::ConsciousnessId;

fn entry(
    id: ConsciousnessId,
    name: &str,
    icon: &str,
    description: &str,
) -> Consciousness {
    Consciousness {
        id,
        name: name.to_string(),
        icon: format!("/consciousness_icons/{icon}.png"),
        description: description.to_string(),
        positions: vec![1, 2, 3, 4, 5, 6],
    }
}

/// Every consciousness in the catalog, in id order.
pub fn all() -> &'static [Consciousness] {
    static CATALOG: OnceLock<Vec<Consciousness>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            entry(
                1,
                "Bathlon",
                "bathlon",
                "2-piece: attack +3%, damage dealt +3%.\n4-piece: each orb clear grants a stack of War Cry, up to 30 stacks. Casting the ultimate converts stacks to signature energy at 0.5 per stack and clears all stacks.",
            ),
            entry(
                2,
                "Da Vinci",
                "davinci",
                "2-piece: attack +3%, HP +3%.\n4-piece: entering via QTE triggers another member's QTE; 15s cooldown.",
            ),
            entry(
                3,
                "Einsteina",
                "einsteina",
                "2-piece: attack +3%, elemental damage +3%.\n4-piece: entering via QTE lowers the target's matching elemental resistance by 15% for 8s.",
            ),
            entry(
                4,
                "Hanna",
                "hanna",
                "2-piece: attack +3%, crit +3%.\n4-piece: entering Matrix grants 2 random signal orbs. After a 3-ping, the next 3-ping deals 25% more damage for 5s.",
            ),
            entry(
                5,
                "Shakespeare",
                "shakespeare",
                "2-piece: attack +3%, fire damage +3%.\n4-piece: attacks have a 20% chance to deal area fire damage and lower fire resistance by 8% for 5s; 5s cooldown.",
            ),
            entry(
                6,
                "Heisen",
                "heisen",
                "2-piece: attack +3%, lightning damage +3%.\n4-piece: attacks have a 20% chance to deal area lightning damage and lower lightning resistance by 8% for 5s; 5s cooldown.",
            ),
            entry(
                7,
                "Darwin",
                "darwin",
                "2-piece: attack +3%, damage dealt +3%.\n4-piece: each orb clear raises damage dealt by 3% for 4s, up to 5 stacks; re-triggering refreshes the duration.",
            ),
            entry(
                8,
                "Leeuwenhoek",
                "leeuwenhoek",
                "2-piece: attack +3%, fire damage +3%.\n4-piece: fire damage +10%. Attacks have a 50% chance to ignite the target for 12% fire damage per second over 3s.",
            ),
            entry(
                9,
                "Kuhlicke",
                "kuhlicke",
                "2-piece: attack +3%, HP +3%.\n4-piece: healing +10%. Casting a healing skill raises the recipient's damage dealt by 15% for 5s.",
            ),
        ]
    })
}

/// Look up a catalog entry by id.
pub fn get(id: ConsciousnessId) -> Option<&'static Consciousness> {
    all().iter().find(|c| c.id == id)
}
