//! In-memory character repository.
//!
//! Backs tests and offline runs. Rows keep insertion order so
//! `list_by_owner` returns the roster the way the remote store would.

use async_trait::async_trait;
use tokio::sync::RwLock;

use constructr_domain::{Character, CharacterId, UserId};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

#[derive(Default)]
pub struct InMemoryCharacterRepo {
    rows: RwLock<Vec<(UserId, Character)>>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows across all owners.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Character>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|(row_owner, _)| *row_owner == owner)
            .map(|(_, character)| character.clone())
            .collect())
    }

    async fn insert(&self, owner: UserId, character: &Character) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|(_, c)| c.id == character.id) {
            return Err(RepoError::store("insert", "duplicate character id"));
        }
        rows.push((owner, character.clone()));
        Ok(())
    }

    async fn update(&self, character: &Character) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|(_, c)| c.id == character.id) {
            Some((_, stored)) => {
                *stored = character.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Character", character.id)),
        }
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        // Deleting an absent row is not an error, matching the remote store.
        self.rows.write().await.retain(|(_, c)| c.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn rows_are_scoped_by_owner() {
        let repo = InMemoryCharacterRepo::new();
        let alice = UserId::new();
        let bob = UserId::new();

        let mine = Character::new(Utc::now()).with_name("Mine");
        let theirs = Character::new(Utc::now()).with_name("Theirs");
        repo.insert(alice, &mine).await.unwrap();
        repo.insert(bob, &theirs).await.unwrap();

        let listed = repo.list_by_owner(alice).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Mine");
    }

    #[tokio::test]
    async fn update_replaces_payload_by_id() {
        let repo = InMemoryCharacterRepo::new();
        let owner = UserId::new();
        let mut character = Character::new(Utc::now());
        repo.insert(owner, &character).await.unwrap();

        character.name = "Renamed".to_string();
        repo.update(&character).await.unwrap();

        let listed = repo.list_by_owner(owner).await.unwrap();
        assert_eq!(listed[0].name, "Renamed");
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let repo = InMemoryCharacterRepo::new();
        let character = Character::new(Utc::now());
        let err = repo.update(&character).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryCharacterRepo::new();
        let owner = UserId::new();
        let character = Character::new(Utc::now());
        repo.insert(owner, &character).await.unwrap();

        repo.delete(character.id).await.unwrap();
        repo.delete(character.id).await.unwrap();
        assert!(repo.is_empty().await);
    }
}
