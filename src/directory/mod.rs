//! User directory: the remote lookup carts are enriched from.
//!
//! The directory is a *capability*, not a store contract: callers get
//! [`UserDirectory::get_user`] and nothing else. The result type spells out
//! the three outcomes (profile, no profile, transport failure) and the cart
//! side is required to treat the last two identically: enrichment
//! unavailable. That contract replaces ad hoc exception suppression with an
//! explicit optional-result seam, which is the point of this module.

pub mod entity;

use crate::framework::{StoreActor, StoreClient};
use crate::model::{UserId, UserProfile};
use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to the user directory at all.
///
/// Callers must treat this exactly like `Ok(None)`: the profile is
/// unavailable, nothing more. It is a separate variant so the cart side can
/// log the two cases differently.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("user directory transport failure: {0}")]
    Transport(String),
}

/// Lookup of a user profile by id against a service that may be slow, down,
/// or simply not know the user.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, user_id: UserId) -> Result<Option<UserProfile>, DirectoryError>;
}

/// Directory implementation backed by a profile store actor.
///
/// An unreachable store (closed or dropped channel) surfaces as
/// [`DirectoryError::Transport`], the in-process equivalent of the remote
/// service being down.
#[derive(Clone)]
pub struct StoreUserDirectory {
    users: StoreClient<UserProfile>,
}

impl StoreUserDirectory {
    pub fn new(users: StoreClient<UserProfile>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for StoreUserDirectory {
    #[tracing::instrument(skip(self))]
    async fn get_user(&self, user_id: UserId) -> Result<Option<UserProfile>, DirectoryError> {
        self.users
            .get(user_id)
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))
    }
}

/// The per-user resource address a remote transport implementation resolves,
/// e.g. `http://user-service/api/users/7`. Kept next to the trait so the
/// addressing convention lives with the capability it belongs to.
pub fn user_endpoint(base: &str, user_id: UserId) -> String {
    format!("{}/users/{}", base.trim_end_matches('/'), user_id)
}

/// Creates a new profile store actor and its client.
pub fn new() -> (StoreActor<UserProfile>, StoreClient<UserProfile>) {
    StoreActor::new(32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_endpoint_embeds_the_id_in_the_path() {
        assert_eq!(
            user_endpoint("http://user-service/api", UserId(7)),
            "http://user-service/api/users/7"
        );
        assert_eq!(
            user_endpoint("http://user-service/api/", UserId(7)),
            "http://user-service/api/users/7"
        );
    }

    #[tokio::test]
    async fn unreachable_store_is_a_transport_failure() {
        let (actor, client) = new();
        drop(actor); // the "remote service" never comes up

        let directory = StoreUserDirectory::new(client);
        let err = directory.get_user(UserId(1)).await.unwrap_err();
        assert!(matches!(err, DirectoryError::Transport(_)));
    }
}
