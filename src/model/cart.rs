use crate::model::user::{UserId, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's shopping basket, identified independently of any order.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity)
/// trait (see [`crate::cart_store`]), allowing it to be managed by a
/// [`StoreActor`](crate::framework::StoreActor).
///
/// `cart_id` is assigned by the store on creation and immutable afterwards;
/// `user_id` names the owning user and is the only replaceable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub cart_id: CartId,
    pub user_id: UserId,
}

/// Payload for creating a new cart.
#[derive(Debug, Clone, Deserialize)]
pub struct CartCreate {
    pub user_id: UserId,
}

/// Payload for updating an existing cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUpdate {
    pub user_id: Option<UserId>,
}

/// A cart together with the owning user's profile, when the user directory
/// could supply one. Never persisted; built on read paths only.
///
/// An absent profile is a valid state, not an error: the directory being
/// down degrades this view, never the cart itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCart {
    pub cart: Cart,
    pub profile: Option<UserProfile>,
}
