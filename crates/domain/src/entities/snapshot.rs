//! Snapshot entity - an immutable point-in-time capture of a construct's
//! core stats and computed damage
//!
//! Snapshots are contained by value in their owning character. Once created,
//! only the user-assigned name may change; every other field is fixed for the
//! snapshot's lifetime. The owning character's id is denormalized into the
//! snapshot so an exported snapshot stays attributable on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::damage::DamageResult;
use crate::ids::{CharacterId, SnapshotId};

/// The three stats the damage formula reads, copied at capture time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreStats {
    pub base_attack: f64,
    pub crit_rate: f64,
    pub crit_damage: f64,
}

/// An immutable capture of a construct's stats and damage estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: SnapshotId,
    /// The only mutable field
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub source_character_id: CharacterId,
    pub core_stats: CoreStats,
    pub damage_result: DamageResult,
}

impl Snapshot {
    pub fn new(
        name: impl Into<String>,
        source_character_id: CharacterId,
        core_stats: CoreStats,
        damage_result: DamageResult,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SnapshotId::new(),
            name: name.into(),
            created_at: now,
            source_character_id,
            core_stats,
            damage_result,
        }
    }
}
