//! Character entity - the primary aggregate of the editor
//!
//! A character owns its skills, snapshots, and recommendation list by value;
//! those records share the character's lifecycle. The audit log is bounded:
//! entries are newest-first and the oldest are silently dropped past
//! [`LOG_CAP`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Skill, Snapshot};
use crate::entities::snapshot::CoreStats;
use crate::error::DomainError;
use crate::ids::{CharacterId, ConsciousnessId};

/// Maximum retained audit log entries per character
pub const LOG_CAP: usize = 50;

/// Default stats for a freshly created character
pub const DEFAULT_BASE_ATTACK: f64 = 1000.0;
pub const DEFAULT_CRIT_RATE: f64 = 0.5;
pub const DEFAULT_CRIT_DAMAGE: f64 = 1.5;

/// A construct configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Model/frame designation, e.g. "B-029"
    pub codename: String,
    /// Path or URL of the avatar image
    pub avatar: String,
    pub quality: Quality,
    pub class: ClassTag,
    pub frame_type: FrameType,
    pub damage_type: DamageType,

    pub base_attack: f64,
    /// Fractional, conventionally 0-1 but values above 1 are accepted
    pub crit_rate: f64,
    pub crit_damage: f64,

    /// Ordered skill list; position is the display/edit order
    pub skills: Vec<Skill>,
    /// Recommended consciousness loadout as catalog ids, order preserved.
    /// Duplicates are not prevented here; the editing surface owns that.
    pub recommended_consciousness: Vec<ConsciousnessId>,
    /// Append-only snapshot history
    pub snapshots: Vec<Snapshot>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Human-readable action log, newest first, capped at [`LOG_CAP`]
    #[serde(default)]
    pub log: Vec<String>,
}

impl Character {
    /// Create a character with the documented editor defaults.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            name: "Lucia".to_string(),
            codename: "Dawnbreak".to_string(),
            avatar: String::new(),
            quality: Quality::A,
            class: ClassTag::Attacker,
            frame_type: FrameType::Universal,
            damage_type: DamageType::Physical,
            base_attack: DEFAULT_BASE_ATTACK,
            crit_rate: DEFAULT_CRIT_RATE,
            crit_damage: DEFAULT_CRIT_DAMAGE,
            skills: Vec::new(),
            recommended_consciousness: Vec::new(),
            snapshots: Vec::new(),
            created_at: now,
            updated_at: now,
            log: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_codename(mut self, codename: impl Into<String>) -> Self {
        self.codename = codename.into();
        self
    }

    pub fn with_stats(mut self, base_attack: f64, crit_rate: f64, crit_damage: f64) -> Self {
        self.base_attack = base_attack;
        self.crit_rate = crit_rate;
        self.crit_damage = crit_damage;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// "Name - codename" label used by list views
    pub fn full_name(&self) -> String {
        format!("{} - {}", self.name, self.codename)
    }

    /// The stats the damage formula reads, as a copyable value
    pub fn core_stats(&self) -> CoreStats {
        CoreStats {
            base_attack: self.base_attack,
            crit_rate: self.crit_rate,
            crit_damage: self.crit_damage,
        }
    }

    /// Record a human-readable action description.
    ///
    /// Entries are kept newest-first; once more than [`LOG_CAP`] entries
    /// exist the oldest are dropped without notice.
    pub fn log_action(&mut self, description: impl Into<String>) {
        self.log.insert(0, description.into());
        self.log.truncate(LOG_CAP);
    }

    /// Refresh the last-update timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn find_snapshot_mut(&mut self, id: crate::ids::SnapshotId) -> Option<&mut Snapshot> {
        self.snapshots.iter_mut().find(|s| s.id == id)
    }
}

/// Initial quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    S,
    #[default]
    A,
    B,
}

impl Quality {
    pub fn all() -> &'static [Quality] {
        &[Quality::S, Quality::A, Quality::B]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Quality::S => "S rank",
            Quality::A => "A rank",
            Quality::B => "B rank",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::S => "S",
            Quality::A => "A",
            Quality::B => "B",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Quality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Quality::S),
            "A" => Ok(Quality::A),
            "B" => Ok(Quality::B),
            _ => Err(DomainError::parse(format!("Unknown quality: {s}"))),
        }
    }
}

/// Combat role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassTag {
    #[default]
    Attacker,
    Tank,
    Support,
    Amplifier,
    Vanguard,
    Annihilator,
    Observer,
}

impl ClassTag {
    pub fn all() -> &'static [ClassTag] {
        &[
            ClassTag::Attacker,
            ClassTag::Tank,
            ClassTag::Support,
            ClassTag::Amplifier,
            ClassTag::Vanguard,
            ClassTag::Annihilator,
            ClassTag::Observer,
        ]
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for ClassTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Attacker" => Ok(ClassTag::Attacker),
            "Tank" => Ok(ClassTag::Tank),
            "Support" => Ok(ClassTag::Support),
            "Amplifier" => Ok(ClassTag::Amplifier),
            "Vanguard" => Ok(ClassTag::Vanguard),
            "Annihilator" => Ok(ClassTag::Annihilator),
            "Observer" => Ok(ClassTag::Observer),
            _ => Err(DomainError::parse(format!("Unknown class tag: {s}"))),
        }
    }
}

/// Frame category deciding the underlying control mechanics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameType {
    #[default]
    Universal,
    Omnidomain,
    Crossover,
}

impl FrameType {
    pub fn all() -> &'static [FrameType] {
        &[
            FrameType::Universal,
            FrameType::Omnidomain,
            FrameType::Crossover,
        ]
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for FrameType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Universal" => Ok(FrameType::Universal),
            "Omnidomain" => Ok(FrameType::Omnidomain),
            "Crossover" => Ok(FrameType::Crossover),
            _ => Err(DomainError::parse(format!("Unknown frame type: {s}"))),
        }
    }
}

/// Damage attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DamageType {
    Fire,
    Lightning,
    Dark,
    Ice,
    #[default]
    Physical,
    Mixed,
    None,
}

impl DamageType {
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Fire,
            DamageType::Lightning,
            DamageType::Dark,
            DamageType::Ice,
            DamageType::Physical,
            DamageType::Mixed,
            DamageType::None,
        ]
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for DamageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fire" => Ok(DamageType::Fire),
            "Lightning" => Ok(DamageType::Lightning),
            "Dark" => Ok(DamageType::Dark),
            "Ice" => Ok(DamageType::Ice),
            "Physical" => Ok(DamageType::Physical),
            "Mixed" => Ok(DamageType::Mixed),
            "None" => Ok(DamageType::None),
            _ => Err(DomainError::parse(format!("Unknown damage type: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn new_character_uses_documented_defaults() {
        let character = Character::new(now());
        assert_eq!(character.quality, Quality::A);
        assert_eq!(character.base_attack, 1000.0);
        assert_eq!(character.crit_rate, 0.5);
        assert_eq!(character.crit_damage, 1.5);
        assert!(character.skills.is_empty());
        assert!(character.snapshots.is_empty());
        assert!(character.recommended_consciousness.is_empty());
        assert!(character.log.is_empty());
    }

    #[test]
    fn full_name_joins_name_and_codename() {
        let character = Character::new(now())
            .with_name("Lucia")
            .with_codename("Crimson Abyss");
        assert_eq!(character.full_name(), "Lucia - Crimson Abyss");
    }

    #[test]
    fn log_keeps_newest_first() {
        let mut character = Character::new(now());
        character.log_action("first");
        character.log_action("second");
        character.log_action("third");
        assert_eq!(character.log, vec!["third", "second", "first"]);
    }

    #[test]
    fn log_is_capped_at_fifty_entries() {
        let mut character = Character::new(now());
        for i in 0..60 {
            character.log_action(format!("action {i}"));
        }
        assert_eq!(character.log.len(), LOG_CAP);
        // Newest entry survives, the oldest ten are gone
        assert_eq!(character.log[0], "action 59");
        assert_eq!(character.log[LOG_CAP - 1], "action 10");
    }

    #[test]
    fn quality_parses_wire_names() {
        assert_eq!("S".parse::<Quality>().unwrap(), Quality::S);
        assert!("X".parse::<Quality>().is_err());
    }

    #[test]
    fn character_serializes_camel_case() {
        let character = Character::new(now());
        let json = serde_json::to_value(&character).unwrap();
        assert!(json.get("baseAttack").is_some());
        assert!(json.get("critRate").is_some());
        assert!(json.get("recommendedConsciousness").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
