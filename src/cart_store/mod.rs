//! Cart persistence: entity implementation, error type, and factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartStore;
use crate::framework::StoreActor;
use crate::model::Cart;

/// Creates a new cart store actor and its typed client.
pub fn new() -> (StoreActor<Cart>, CartStore) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = CartStore::new(generic_client);

    (actor, client)
}
