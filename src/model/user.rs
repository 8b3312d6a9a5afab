use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for users.
///
/// Users are owned by the user directory service; this crate only references
/// them (`Cart::user_id`) and reads their profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user profile as the user directory returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Payload for registering a profile with the directory's backing store.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfileCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Payload for updating a stored profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
}
