//! Consciousness entity - equippable gear/buff catalog data
//!
//! Consciousness entries are read-only reference data defined once at process
//! start (see [`crate::catalog`]). The application never creates, mutates, or
//! destroys them; characters reference them by integer id in their
//! recommendation lists.

use serde::{Deserialize, Serialize};

use crate::ids::ConsciousnessId;

/// A consciousness catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consciousness {
    /// Stable integer id from the source table; the only identity used by
    /// recommendation references
    pub id: ConsciousnessId,
    pub name: String,
    pub icon: String,
    /// Set-bonus text, newlines separate the 2-piece and 4-piece effects
    pub description: String,
    /// Equip slots (1-6) where this consciousness may appear
    pub positions: Vec<u8>,
}
