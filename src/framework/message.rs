//! # Generic Messages
//!
//! The message types exchanged between a [`StoreClient`](crate::framework::StoreClient)
//! and its [`StoreActor`](crate::framework::StoreActor).

use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Respond<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to the standard lifecycle operations of a persistent
/// record, plus `List` for full scans and `Action` for record-specific logic
/// that doesn't fit the CRUD model:
///
/// - **Create**: initialize a new record from [`StoreEntity::Create`];
///   responds with the persisted record.
/// - **Get**: fetch one record by id.
/// - **List**: fetch a snapshot of every record (the `findAll` scans).
/// - **Update**: mutate an existing record via [`StoreEntity::Update`].
/// - **Delete**: remove the record (hard delete).
/// - **Action**: execute a custom [`StoreEntity::Action`].
///
/// The enum is generic over `T: StoreEntity` and uses the trait's associated
/// types, so a cart payload cannot be sent to the order store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Respond<T>,
    },
    Get {
        id: T::Id,
        respond_to: Respond<Option<T>>,
    },
    List {
        respond_to: Respond<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Respond<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Respond<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Respond<T::ActionResult>,
    },
}
