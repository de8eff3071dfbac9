//! Domain entities - the records the editor works on

mod character;
mod consciousness;
mod skill;
pub(crate) mod snapshot;

pub use character::{
    Character, ClassTag, DamageType, FrameType, Quality, DEFAULT_BASE_ATTACK, DEFAULT_CRIT_DAMAGE,
    DEFAULT_CRIT_RATE, LOG_CAP,
};
pub use consciousness::Consciousness;
pub use skill::{DamageTag, Skill, SkillKind};
pub use snapshot::{CoreStats, Snapshot};
