//! Order persistence: entity implementation with the lifecycle guards,
//! actions, error type, and factory.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderStore;
use crate::framework::StoreActor;
use crate::model::Order;

/// Creates a new order store actor and its typed client.
///
/// The actor still needs a cart store client injected via `run()` before it
/// can validate anything.
pub fn new() -> (StoreActor<Order>, OrderStore) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = OrderStore::new(generic_client);

    (actor, client)
}
