//! Skill entity - a single ability slot on a construct
//!
//! Skills are contained by value in their owning [`Character`](super::Character):
//! they have no independent identity or lifecycle, and their position in the
//! skill list is the display/edit order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A skill on a construct's kit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Path or URL of the skill icon
    pub icon: String,
    pub name: String,
    /// Free text, newlines allowed
    pub description: String,
    pub kind: SkillKind,
    /// Classifies the damage contribution for buff bookkeeping; overlaps with
    /// [`SkillKind`] but is a separate axis (e.g. a passive can contribute
    /// basic-attack damage)
    pub damage_tag: DamageTag,
    /// Damage multiplier applied to base attack; non-negative by convention
    /// but not enforced here
    pub multiplier: f64,
}

impl Skill {
    pub fn new(kind: SkillKind) -> Self {
        Self {
            icon: String::new(),
            name: String::new(),
            description: String::new(),
            kind,
            damage_tag: DamageTag::BasicAttack,
            multiplier: 0.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_damage_tag(mut self, tag: DamageTag) -> Self {
        self.damage_tag = tag;
        self
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new(SkillKind::Normal)
    }
}

/// Mechanical category of a skill slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    /// Basic attack chain
    #[default]
    Normal,
    /// Red signal orb
    Red,
    /// Yellow signal orb
    Yellow,
    /// Blue signal orb
    Blue,
    Passive,
    /// Signature / burst skill
    Ultimate,
    /// Triggered on a teammate's three-orb clear
    Qte,
}

impl SkillKind {
    /// All kinds, in editor dropdown order
    pub fn all() -> &'static [SkillKind] {
        &[
            SkillKind::Normal,
            SkillKind::Red,
            SkillKind::Yellow,
            SkillKind::Blue,
            SkillKind::Passive,
            SkillKind::Ultimate,
            SkillKind::Qte,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillKind::Normal => "Normal",
            SkillKind::Red => "Red orb",
            SkillKind::Yellow => "Yellow orb",
            SkillKind::Blue => "Blue orb",
            SkillKind::Passive => "Passive",
            SkillKind::Ultimate => "Ultimate",
            SkillKind::Qte => "QTE",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillKind::Normal => "normal",
            SkillKind::Red => "red",
            SkillKind::Yellow => "yellow",
            SkillKind::Blue => "blue",
            SkillKind::Passive => "passive",
            SkillKind::Ultimate => "ultimate",
            SkillKind::Qte => "qte",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SkillKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(SkillKind::Normal),
            "red" => Ok(SkillKind::Red),
            "yellow" => Ok(SkillKind::Yellow),
            "blue" => Ok(SkillKind::Blue),
            "passive" => Ok(SkillKind::Passive),
            "ultimate" => Ok(SkillKind::Ultimate),
            "qte" => Ok(SkillKind::Qte),
            _ => Err(DomainError::parse(format!("Unknown skill kind: {s}"))),
        }
    }
}

/// Damage-contribution tag, the second classification axis on a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DamageTag {
    #[default]
    BasicAttack,
    CorePassive,
    RedOrb,
    YellowOrb,
    BlueOrb,
    Ultimate,
    Qte,
}

impl DamageTag {
    /// All tags, in editor dropdown order
    pub fn all() -> &'static [DamageTag] {
        &[
            DamageTag::BasicAttack,
            DamageTag::CorePassive,
            DamageTag::RedOrb,
            DamageTag::YellowOrb,
            DamageTag::BlueOrb,
            DamageTag::Ultimate,
            DamageTag::Qte,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DamageTag::BasicAttack => "Basic attack",
            DamageTag::CorePassive => "Core passive",
            DamageTag::RedOrb => "Red orb",
            DamageTag::YellowOrb => "Yellow orb",
            DamageTag::BlueOrb => "Blue orb",
            DamageTag::Ultimate => "Ultimate",
            DamageTag::Qte => "QTE",
        }
    }
}

impl fmt::Display for DamageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageTag::BasicAttack => "basicAttack",
            DamageTag::CorePassive => "corePassive",
            DamageTag::RedOrb => "redOrb",
            DamageTag::YellowOrb => "yellowOrb",
            DamageTag::BlueOrb => "blueOrb",
            DamageTag::Ultimate => "ultimate",
            DamageTag::Qte => "qte",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DamageTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basicAttack" => Ok(DamageTag::BasicAttack),
            "corePassive" => Ok(DamageTag::CorePassive),
            "redOrb" => Ok(DamageTag::RedOrb),
            "yellowOrb" => Ok(DamageTag::YellowOrb),
            "blueOrb" => Ok(DamageTag::BlueOrb),
            "ultimate" => Ok(DamageTag::Ultimate),
            "qte" => Ok(DamageTag::Qte),
            _ => Err(DomainError::parse(format!("Unknown damage tag: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_kind_round_trips_through_str() {
        for kind in SkillKind::all() {
            let parsed: SkillKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn skill_kind_rejects_unknown() {
        let err = "orange".parse::<SkillKind>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn damage_tag_round_trips_through_str() {
        for tag in DamageTag::all() {
            let parsed: DamageTag = tag.to_string().parse().unwrap();
            assert_eq!(parsed, *tag);
        }
    }

    #[test]
    fn skill_serializes_camel_case() {
        let skill = Skill::new(SkillKind::Red)
            .with_name("Crimson Edge")
            .with_damage_tag(DamageTag::RedOrb)
            .with_multiplier(2.4);
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["damageTag"], "redOrb");
        assert_eq!(json["kind"], "red");
        assert_eq!(json["multiplier"], 2.4);
    }
}
