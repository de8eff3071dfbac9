//! Export/import bridge.
//!
//! Converts characters to and from the portable JSON artifact: UTF-8,
//! 2-space indented, top-level shape either a single character object or an
//! array of characters, field names mirroring the in-memory shapes.
//!
//! Imported payloads are untrusted. They are deserialized into a permissive
//! shape (missing collections default to empty) and then validated, so a
//! payload that is not structurally a character is rejected instead of
//! silently poisoning later damage arithmetic.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use constructr_domain::{
    Character, ClassTag, ConsciousnessId, DamageType, FrameType, Quality, Skill, Snapshot,
    DEFAULT_BASE_ATTACK, DEFAULT_CRIT_DAMAGE, DEFAULT_CRIT_RATE,
};

use crate::infrastructure::ports::{FileDialogPort, TransferError};

/// Everything an import may carry. Ids and timestamps are deliberately
/// absent: an import always allocates a brand-new character.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterImport {
    pub name: String,
    pub codename: String,
    pub avatar: String,
    pub quality: Quality,
    pub class: ClassTag,
    pub frame_type: FrameType,
    pub damage_type: DamageType,
    #[validate(range(min = 0.0))]
    pub base_attack: f64,
    #[validate(range(min = 0.0))]
    pub crit_rate: f64,
    #[validate(range(min = 0.0))]
    pub crit_damage: f64,
    pub skills: Vec<Skill>,
    pub recommended_consciousness: Vec<ConsciousnessId>,
    pub snapshots: Vec<Snapshot>,
    pub log: Vec<String>,
}

impl Default for CharacterImport {
    fn default() -> Self {
        Self {
            name: String::new(),
            codename: String::new(),
            avatar: String::new(),
            quality: Quality::default(),
            class: ClassTag::default(),
            frame_type: FrameType::default(),
            damage_type: DamageType::default(),
            base_attack: DEFAULT_BASE_ATTACK,
            crit_rate: DEFAULT_CRIT_RATE,
            crit_damage: DEFAULT_CRIT_DAMAGE,
            skills: Vec::new(),
            recommended_consciousness: Vec::new(),
            snapshots: Vec::new(),
            log: Vec::new(),
        }
    }
}

impl CharacterImport {
    /// Materialize a brand-new character from this payload: fresh id, fresh
    /// timestamps, every other field taken from the import.
    pub fn into_character(self, now: DateTime<Utc>) -> Character {
        let mut character = Character::new(now);
        character.name = self.name;
        character.codename = self.codename;
        character.avatar = self.avatar;
        character.quality = self.quality;
        character.class = self.class;
        character.frame_type = self.frame_type;
        character.damage_type = self.damage_type;
        character.base_attack = self.base_attack;
        character.crit_rate = self.crit_rate;
        character.crit_damage = self.crit_damage;
        character.skills = self.skills;
        character.recommended_consciousness = self.recommended_consciousness;
        character.snapshots = self.snapshots;
        character.log = self.log;
        character
    }
}

/// Bridge between in-memory characters and portable JSON files.
pub struct TransferBridge {
    dialog: Arc<dyn FileDialogPort>,
}

impl TransferBridge {
    pub fn new(dialog: Arc<dyn FileDialogPort>) -> Self {
        Self { dialog }
    }

    /// Serialize one character and hand it to the save dialog.
    pub async fn export_character(&self, character: &Character) -> Result<(), TransferError> {
        let json = to_pretty_json(character)?;
        self.dialog
            .save(&export_filename(&character.name), &json)
            .await
    }

    /// Serialize the whole roster as a JSON array.
    pub async fn export_roster(&self, characters: &[Character]) -> Result<(), TransferError> {
        let json = to_pretty_json(characters)?;
        self.dialog.save("roster.json", &json).await
    }

    /// Prompt for a JSON file and parse it into a validated import payload.
    pub async fn import(&self) -> Result<CharacterImport, TransferError> {
        let text = self.dialog.pick().await?;
        parse_import(&text)
    }
}

/// Parse and validate an import payload from raw JSON text.
pub fn parse_import(text: &str) -> Result<CharacterImport, TransferError> {
    let import: CharacterImport =
        serde_json::from_str(text).map_err(|e| TransferError::InvalidJson(e.to_string()))?;
    import
        .validate()
        .map_err(|e| TransferError::InvalidPayload(e.to_string()))?;
    Ok(import)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, TransferError> {
    serde_json::to_string_pretty(value).map_err(|e| TransferError::InvalidJson(e.to_string()))
}

fn export_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "character.json".to_string()
    } else {
        format!("{stem}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constructr_domain::SkillKind;

    fn sample_character() -> Character {
        let mut character = Character::new(Utc::now())
            .with_name("Karenina")
            .with_codename("Ember")
            .with_stats(1480.0, 0.62, 1.8);
        character.skills.push(
            Skill::new(SkillKind::Red)
                .with_name("Flamewave")
                .with_multiplier(2.2),
        );
        character.recommended_consciousness = vec![5, 8];
        character.log_action("Created");
        character
    }

    #[test]
    fn round_trip_preserves_all_portable_fields() {
        let original = sample_character();
        let json = serde_json::to_string_pretty(&original).unwrap();

        let import = parse_import(&json).unwrap();
        let restored = import.into_character(Utc::now());

        assert_ne!(restored.id, original.id);
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.codename, original.codename);
        assert_eq!(restored.quality, original.quality);
        assert_eq!(restored.base_attack, original.base_attack);
        assert_eq!(restored.crit_rate, original.crit_rate);
        assert_eq!(restored.crit_damage, original.crit_damage);
        assert_eq!(restored.skills, original.skills);
        assert_eq!(
            restored.recommended_consciousness,
            original.recommended_consciousness
        );
        assert_eq!(restored.log, original.log);
    }

    #[test]
    fn export_uses_two_space_indentation() {
        let json = to_pretty_json(&sample_character()).unwrap();
        assert!(json.lines().nth(1).unwrap().starts_with("  \""));
    }

    #[test]
    fn roster_serializes_as_a_json_array() {
        let roster = vec![sample_character(), sample_character()];
        let json = to_pretty_json(roster.as_slice()).unwrap();

        let parsed: Vec<CharacterImport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Karenina");
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let import = parse_import(r#"{"name": "Bare", "baseAttack": 900}"#).unwrap();
        assert_eq!(import.name, "Bare");
        assert_eq!(import.base_attack, 900.0);
        assert!(import.skills.is_empty());
        assert!(import.snapshots.is_empty());
    }

    #[test]
    fn invalid_json_is_distinguishable() {
        let err = parse_import("not json").unwrap_err();
        assert!(matches!(err, TransferError::InvalidJson(_)));
    }

    #[test]
    fn negative_stats_are_rejected() {
        let err = parse_import(r#"{"name": "Broken", "baseAttack": -5}"#).unwrap_err();
        assert!(matches!(err, TransferError::InvalidPayload(_)));
    }

    #[test]
    fn filename_is_derived_from_the_name() {
        assert_eq!(export_filename("Lucia: Dawn"), "Lucia__Dawn.json");
        assert_eq!(export_filename(""), "character.json");
    }
}
