//! Character store - single source of truth for the roster.
//!
//! Owns the character collection, the active-selection pointer, and the
//! busy flag; every mutation goes through here. Local state is updated
//! synchronously under the lock and is visible to any later read regardless
//! of whether the paired remote write has resolved. Remote failures never
//! propagate to callers: they are reported through the [`Notifier`] side
//! channel and, for deletion only, compensated by rolling the local state
//! back to its captured pre-delete shape.
//!
//! The store is an explicit context object: all collaborators are
//! constructor-injected so tests can run any number of independent
//! instances.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use constructr_domain::{
    calculate_damage, Character, CharacterId, ClassTag, ConsciousnessId, DamageTag, DamageType,
    FrameType, Quality, Skill, SkillKind, Snapshot, SnapshotId, UserId,
};

use crate::application::transfer::{CharacterImport, TransferBridge};
use crate::infrastructure::ports::{
    AuthPort, CharacterRepo, ClockPort, Notifier, TransferError,
};

/// How long the busy flag stays up after a selection change. Cosmetic UI
/// affordance, not a correctness mechanism.
const SWITCH_DELAY: Duration = Duration::from_millis(300);

#[derive(Default)]
struct RosterState {
    characters: Vec<Character>,
    active: Option<CharacterId>,
    switching: bool,
}

impl RosterState {
    fn active_mut(&mut self) -> Option<&mut Character> {
        let id = self.active?;
        self.characters.iter_mut().find(|c| c.id == id)
    }

    fn index_of(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }
}

/// Captured pre-delete shape for the compensating rollback.
struct DeleteUndo {
    character: Character,
    index: usize,
    prior_active: Option<CharacterId>,
}

pub struct CharacterStore {
    repo: Arc<dyn CharacterRepo>,
    auth: Arc<dyn AuthPort>,
    clock: Arc<dyn ClockPort>,
    notifier: Arc<dyn Notifier>,
    transfer: TransferBridge,
    state: RwLock<RosterState>,
}

impl CharacterStore {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        auth: Arc<dyn AuthPort>,
        clock: Arc<dyn ClockPort>,
        notifier: Arc<dyn Notifier>,
        transfer: TransferBridge,
    ) -> Self {
        Self {
            repo,
            auth,
            clock,
            notifier,
            transfer,
            state: RwLock::new(RosterState::default()),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub async fn roster(&self) -> Vec<Character> {
        self.state.read().await.characters.clone()
    }

    pub async fn active_id(&self) -> Option<CharacterId> {
        self.state.read().await.active
    }

    pub async fn active_character(&self) -> Option<Character> {
        let state = self.state.read().await;
        let id = state.active?;
        state.characters.iter().find(|c| c.id == id).cloned()
    }

    pub async fn is_switching(&self) -> bool {
        self.state.read().await.switching
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Load the signed-in user's characters from the remote store.
    ///
    /// An empty remote set seeds one default character. A failed remote read
    /// degrades to an empty roster with a reported error; it never raises.
    pub async fn initialize(&self) {
        let Some(user) = self.auth.current_user().await else {
            tracing::debug!("No signed-in user, skipping roster load");
            return;
        };

        match self.repo.list_by_owner(user).await {
            Ok(characters) if characters.is_empty() => {
                tracing::info!("Remote roster is empty, creating default character");
                self.add_character().await;
            }
            Ok(characters) => {
                tracing::info!(count = characters.len(), "Loaded roster");
                let mut state = self.state.write().await;
                state.active = characters.first().map(|c| c.id);
                state.characters = characters;
            }
            Err(e) => {
                self.notifier
                    .notify_error(&format!("Failed to load characters: {e}"));
            }
        }
    }

    /// Create a character with the editor defaults, persist it, then append
    /// it locally and make it active.
    ///
    /// The add is NOT optimistic: a failed remote insert leaves the local
    /// collection unchanged.
    pub async fn add_character(&self) -> Option<CharacterId> {
        let Some(user) = self.auth.current_user().await else {
            return None;
        };

        let mut character = Character::new(self.clock.now());
        character.log_action("Created");

        if let Err(e) = self.repo.insert(user, &character).await {
            self.notifier
                .notify_error(&format!("Failed to create character: {e}"));
            return None;
        }

        let id = character.id;
        let mut state = self.state.write().await;
        state.characters.push(character);
        state.active = Some(id);
        Some(id)
    }

    /// Optimistically remove a character, then confirm with the remote store.
    ///
    /// The local removal (and the active-pointer reassignment to the
    /// preceding character) happens before the remote call. On remote
    /// failure the captured character is reinserted at its original index
    /// and the prior active pointer restored. Keyed on the id: deleting an
    /// id that is no longer present is a no-op, so a duplicate delete racing
    /// its own rollback resolves to last-write-wins.
    pub async fn delete_character(&self, id: CharacterId) {
        let undo = {
            let mut state = self.state.write().await;
            let Some(index) = state.index_of(id) else {
                return;
            };
            let character = state.characters.remove(index);
            let prior_active = state.active;
            if state.active == Some(id) {
                state.active = if state.characters.is_empty() {
                    None
                } else if index > 0 {
                    Some(state.characters[index - 1].id)
                } else {
                    Some(state.characters[0].id)
                };
            }
            DeleteUndo {
                character,
                index,
                prior_active,
            }
        };

        if self.auth.current_user().await.is_none() {
            // Nothing to confirm remotely; the optimistic removal stands.
            return;
        }

        if let Err(e) = self.repo.delete(id).await {
            self.notifier
                .notify_error(&format!("Failed to delete character: {e}"));
            let mut state = self.state.write().await;
            if state.index_of(id).is_none() {
                let index = undo.index.min(state.characters.len());
                state.characters.insert(index, undo.character);
                state.active = undo.prior_active;
            }
        }
    }

    /// Point the editor at another character.
    ///
    /// Membership is a caller precondition and is not validated; an unknown
    /// id simply makes subsequent active-character reads return `None`. The
    /// busy flag is raised for a fixed short delay as UI feedback.
    pub async fn set_active_character(&self, id: CharacterId) {
        {
            let mut state = self.state.write().await;
            state.active = Some(id);
            state.switching = true;
        }
        tokio::time::sleep(SWITCH_DELAY).await;
        self.state.write().await.switching = false;
    }

    // =========================================================================
    // Field updates
    // =========================================================================

    /// Apply one typed field update to the active character.
    pub async fn update_character(&self, update: CharacterUpdate) {
        let description = format!("Updated {}", update.field_name());
        self.mutate_active(description, |character| update.apply(character))
            .await;
    }

    /// Replace the recommendation list wholesale. The caller supplies the
    /// full desired set; there are no merge semantics.
    pub async fn update_recommended_consciousness(&self, selection: Vec<ConsciousnessId>) {
        self.mutate_active("Updated recommended consciousness".to_string(), |c| {
            c.recommended_consciousness = selection;
        })
        .await;
    }

    // =========================================================================
    // Skills
    // =========================================================================

    /// Append an empty skill slot to the active character.
    pub async fn add_skill(&self) {
        self.mutate_active("Added skill".to_string(), |c| {
            c.skills.push(Skill::default());
        })
        .await;
    }

    /// Remove the skill at `index`. Out-of-range indices are a silent no-op.
    pub async fn remove_skill(&self, index: usize) {
        self.mutate_active_when("Removed skill".to_string(), |c| {
            if index >= c.skills.len() {
                return false;
            }
            c.skills.remove(index);
            true
        })
        .await;
    }

    /// Apply one typed field update to the skill at `index`. Out-of-range
    /// indices are a silent no-op.
    pub async fn update_skill(&self, index: usize, update: SkillUpdate) {
        let description = format!("Updated skill {}", update.field_name());
        self.mutate_active_when(description, |c| match c.skills.get_mut(index) {
            Some(skill) => {
                update.apply(skill);
                true
            }
            None => false,
        })
        .await;
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Capture the active character's stats and damage estimate as a new
    /// immutable snapshot.
    pub async fn take_snapshot(&self) -> Option<SnapshotId> {
        let now = self.clock.now();
        let mut created = None;
        self.mutate_active("Took snapshot".to_string(), |character| {
            let damage = calculate_damage(Some(&*character));
            let name = format!("Snapshot {}", character.snapshots.len() + 1);
            let snapshot = Snapshot::new(name, character.id, character.core_stats(), damage, now);
            created = Some(snapshot.id);
            character.snapshots.push(snapshot);
        })
        .await;
        created
    }

    /// Rename a snapshot; the name is a snapshot's only mutable field.
    /// Unknown ids are a silent no-op.
    pub async fn update_snapshot_name(&self, id: SnapshotId, name: String) {
        self.mutate_active_when("Renamed snapshot".to_string(), |c| {
            match c.find_snapshot_mut(id) {
                Some(snapshot) => {
                    snapshot.name = name;
                    true
                }
                None => false,
            }
        })
        .await;
    }

    /// Delete a snapshot by id. Unknown ids are a silent no-op.
    pub async fn delete_snapshot(&self, id: SnapshotId) {
        self.mutate_active_when("Deleted snapshot".to_string(), |c| {
            let before = c.snapshots.len();
            c.snapshots.retain(|s| s.id != id);
            c.snapshots.len() < before
        })
        .await;
    }

    // =========================================================================
    // Export / import
    // =========================================================================

    /// Export the active character as a JSON file. No active character is a
    /// no-op.
    pub async fn export_active_character(&self) -> Result<(), TransferError> {
        let Some(character) = self.active_character().await else {
            return Ok(());
        };
        self.transfer.export_character(&character).await
    }

    /// Export the whole roster as one JSON array. An empty roster is a no-op.
    pub async fn export_all_characters(&self) -> Result<(), TransferError> {
        let characters = self.roster().await;
        if characters.is_empty() {
            return Ok(());
        }
        self.transfer.export_roster(&characters).await
    }

    /// Allocate a brand-new character from an import payload (fresh id and
    /// timestamps), persist it, and make it active.
    pub async fn import_character(&self, data: CharacterImport) -> Option<CharacterId> {
        let Some(user) = self.auth.current_user().await else {
            return None;
        };

        let mut character = data.into_character(self.clock.now());
        character.log_action("Imported");

        if let Err(e) = self.repo.insert(user, &character).await {
            self.notifier
                .notify_error(&format!("Failed to import character: {e}"));
            return None;
        }

        let id = character.id;
        let mut state = self.state.write().await;
        state.characters.push(character);
        state.active = Some(id);
        Some(id)
    }

    /// Prompt for a file and import it. Transfer errors surface to the
    /// caller, which owns the user-facing messaging.
    pub async fn import_character_from_file(&self) -> Result<Option<CharacterId>, TransferError> {
        let data = self.transfer.import().await?;
        Ok(self.import_character(data).await)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Apply `mutate` to the active character, stamp it, log `description`,
    /// and push the full record to the remote store. No active character is
    /// a no-op.
    async fn mutate_active(&self, description: String, mutate: impl FnOnce(&mut Character)) {
        self.mutate_active_when(description, |character| {
            mutate(character);
            true
        })
        .await;
    }

    /// Like [`Self::mutate_active`], but `mutate` may decline (returning
    /// `false`) to signal a no-op, in which case nothing is stamped, logged,
    /// or written.
    async fn mutate_active_when(
        &self,
        description: String,
        mutate: impl FnOnce(&mut Character) -> bool,
    ) {
        let updated = {
            let mut state = self.state.write().await;
            let Some(character) = state.active_mut() else {
                return;
            };
            if !mutate(character) {
                return;
            }
            character.touch(self.clock.now());
            character.log_action(description);
            character.clone()
        };
        self.sync(&updated).await;
    }

    /// Push the full character record to the remote store. Failures are
    /// reported and the optimistic local state is left as-is; there is no
    /// retry.
    async fn sync(&self, character: &Character) {
        if self.auth.current_user().await.is_none() {
            return;
        }
        if let Err(e) = self.repo.update(character).await {
            self.notifier
                .notify_error(&format!("Failed to save character: {e}"));
        }
    }
}

/// One typed update command per mutable character field.
///
/// Replaces the dynamic `updateField(key, value)` protocol with a closed sum
/// type, so every accepted field/value pairing is checked at compile time.
/// Out-of-range numeric values are still accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterUpdate {
    Name(String),
    Codename(String),
    Avatar(String),
    Quality(Quality),
    Class(ClassTag),
    FrameType(FrameType),
    DamageType(DamageType),
    BaseAttack(f64),
    CritRate(f64),
    CritDamage(f64),
}

impl CharacterUpdate {
    fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Codename(_) => "codename",
            Self::Avatar(_) => "avatar",
            Self::Quality(_) => "quality",
            Self::Class(_) => "class",
            Self::FrameType(_) => "frame type",
            Self::DamageType(_) => "damage type",
            Self::BaseAttack(_) => "base attack",
            Self::CritRate(_) => "crit rate",
            Self::CritDamage(_) => "crit damage",
        }
    }

    fn apply(self, character: &mut Character) {
        match self {
            Self::Name(v) => character.name = v,
            Self::Codename(v) => character.codename = v,
            Self::Avatar(v) => character.avatar = v,
            Self::Quality(v) => character.quality = v,
            Self::Class(v) => character.class = v,
            Self::FrameType(v) => character.frame_type = v,
            Self::DamageType(v) => character.damage_type = v,
            Self::BaseAttack(v) => character.base_attack = v,
            Self::CritRate(v) => character.crit_rate = v,
            Self::CritDamage(v) => character.crit_damage = v,
        }
    }
}

/// One typed update command per mutable skill field.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillUpdate {
    Icon(String),
    Name(String),
    Description(String),
    Kind(SkillKind),
    DamageTag(DamageTag),
    Multiplier(f64),
}

impl SkillUpdate {
    fn field_name(&self) -> &'static str {
        match self {
            Self::Icon(_) => "icon",
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::Kind(_) => "kind",
            Self::DamageTag(_) => "damage tag",
            Self::Multiplier(_) => "multiplier",
        }
    }

    fn apply(self, skill: &mut Skill) {
        match self {
            Self::Icon(v) => skill.icon = v,
            Self::Name(v) => skill.name = v,
            Self::Description(v) => skill.description = v,
            Self::Kind(v) => skill.kind = v,
            Self::DamageTag(v) => skill.damage_tag = v,
            Self::Multiplier(v) => skill.multiplier = v,
        }
    }
}
