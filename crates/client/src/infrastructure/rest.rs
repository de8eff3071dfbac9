//! REST adapter for the hosted row store.
//!
//! Speaks a PostgREST-style API: one `characters` table addressed by row id,
//! each row carrying the owner's user id and the character JSON as an opaque
//! payload. Row filters use the `column=eq.value` query syntax.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use constructr_domain::{Character, CharacterId, UserId};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// Default base URL (local supabase stack).
pub const DEFAULT_STORE_URL: &str = "http://localhost:54321";

const TABLE_PATH: &str = "/rest/v1/characters";

/// Client for the remote character table.
#[derive(Clone)]
pub struct RestCharacterRepo {
    client: Client,
    base_url: String,
    api_key: String,
}

/// One row of the `characters` table.
#[derive(Debug, Serialize, Deserialize)]
struct CharacterRow {
    id: Uuid,
    owner_id: Uuid,
    payload: Character,
}

/// Body of a payload-only PATCH.
#[derive(Debug, Serialize)]
struct PayloadPatch<'a> {
    payload: &'a Character,
}

impl RestCharacterRepo {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        // Row operations are small; a short timeout keeps a dead store from
        // hanging the editor.
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses `ROSTER_STORE_URL` and `ROSTER_STORE_KEY`, falling back to the
    /// local-stack default URL and an empty key.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ROSTER_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let api_key = std::env::var("ROSTER_STORE_KEY").unwrap_or_default();
        Self::new(&base_url, &api_key)
    }

    fn table_url(&self) -> String {
        format!("{}{}", self.base_url, TABLE_PATH)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn map_status(operation: &'static str, status: StatusCode) -> RepoError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            RepoError::Unauthorized
        } else {
            RepoError::store(operation, format!("unexpected status {status}"))
        }
    }
}

#[async_trait]
impl CharacterRepo for RestCharacterRepo {
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Character>, RepoError> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("owner_id", format!("eq.{}", owner.as_uuid()))])
            .query(&[("select", "*")]);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::store("list_by_owner", e))?;

        if !response.status().is_success() {
            return Err(Self::map_status("list_by_owner", response.status()));
        }

        let rows: Vec<CharacterRow> = response
            .json()
            .await
            .map_err(|e| RepoError::serialization(e))?;
        Ok(rows.into_iter().map(|row| row.payload).collect())
    }

    async fn insert(&self, owner: UserId, character: &Character) -> Result<(), RepoError> {
        let row = CharacterRow {
            id: character.id.to_uuid(),
            owner_id: owner.to_uuid(),
            payload: character.clone(),
        };

        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(&row);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::store("insert", e))?;

        if !response.status().is_success() {
            return Err(Self::map_status("insert", response.status()));
        }
        Ok(())
    }

    async fn update(&self, character: &Character) -> Result<(), RepoError> {
        let request = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", character.id.as_uuid()))])
            .header("Prefer", "return=minimal")
            .json(&PayloadPatch { payload: character });

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::store("update", e))?;

        if !response.status().is_success() {
            return Err(Self::map_status("update", response.status()));
        }
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        let request = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id.as_uuid()))]);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::store("delete", e))?;

        if !response.status().is_success() {
            return Err(Self::map_status("delete", response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let repo = RestCharacterRepo::new("http://localhost:54321/", "key");
        assert_eq!(repo.table_url(), "http://localhost:54321/rest/v1/characters");
    }

    #[test]
    fn unauthorized_statuses_map_to_unauthorized() {
        assert!(matches!(
            RestCharacterRepo::map_status("update", StatusCode::UNAUTHORIZED),
            RepoError::Unauthorized
        ));
        assert!(matches!(
            RestCharacterRepo::map_status("update", StatusCode::INTERNAL_SERVER_ERROR),
            RepoError::Store { .. }
        ));
    }
}
