//! Constructr Domain - entities, the consciousness catalog, and the damage model
//!
//! Pure domain layer: no async, no I/O. Timestamps are injected by callers so
//! the layer stays deterministic under test.

pub mod catalog;
pub mod damage;
pub mod entities;
pub mod error;
pub mod ids;

pub use damage::{calculate_damage, DamageResult, SkillDamage, UNNAMED_SKILL};
pub use entities::{
    Character, ClassTag, Consciousness, CoreStats, DamageTag, DamageType, FrameType, Quality,
    Skill, SkillKind, Snapshot, DEFAULT_BASE_ATTACK, DEFAULT_CRIT_DAMAGE, DEFAULT_CRIT_RATE,
    LOG_CAP,
};
pub use error::DomainError;
pub use ids::{CharacterId, ConsciousnessId, SnapshotId, UserId};
