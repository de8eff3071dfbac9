//! Repository port traits for the remote row store.

use async_trait::async_trait;

use constructr_domain::{Character, CharacterId, UserId};

use super::error::RepoError;

/// Remote persistence collaborator: a row store addressed by character id,
/// each row holding the owning user and the full character payload.
///
/// The store issues a full-record write after every accepted mutation; there
/// is no field-level diffing, and `update` is idempotent by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// All characters owned by `owner`, in insertion order.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Character>, RepoError>;

    /// Insert a new row for `character` under `owner`.
    async fn insert(&self, owner: UserId, character: &Character) -> Result<(), RepoError>;

    /// Replace the payload of the row with `character.id`.
    async fn update(&self, character: &Character) -> Result<(), RepoError>;

    /// Delete the row with the given id.
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
}
