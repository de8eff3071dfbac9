//! Session-backed auth adapter.
//!
//! The surrounding shell owns sign-in/sign-out; the store only ever asks for
//! the current identity through [`AuthPort`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use constructr_domain::UserId;

use crate::infrastructure::ports::AuthPort;

/// Holds the identity of the signed-in user, if any.
#[derive(Default)]
pub struct SessionAuth {
    user: RwLock<Option<UserId>>,
}

impl SessionAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a signed-in identity (useful in tests and headless runs).
    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    pub async fn sign_in(&self, user: UserId) {
        *self.user.write().await = Some(user);
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
    }
}

#[async_trait]
impl AuthPort for SessionAuth {
    async fn current_user(&self) -> Option<UserId> {
        *self.user.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_and_out_round_trip() {
        let auth = SessionAuth::new();
        assert!(auth.current_user().await.is_none());

        let user = UserId::new();
        auth.sign_in(user).await;
        assert_eq!(auth.current_user().await, Some(user));

        auth.sign_out().await;
        assert!(auth.current_user().await.is_none());
    }
}
