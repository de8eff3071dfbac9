//! Application layer - the roster store and the JSON transfer bridge.

mod store;
mod transfer;

pub use store::{CharacterStore, CharacterUpdate, SkillUpdate};
pub use transfer::{parse_import, CharacterImport, TransferBridge};
