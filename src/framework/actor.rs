//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns the records
//! of one store and processes all requests against them sequentially. It is
//! the "server" side of each store: the cart store, the order store, and the
//! user-profile store are all instances of this one loop.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages the records of one store.
///
/// # Architecture Note
/// This struct owns the state (`records`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each store processes its messages *sequentially* in a loop, so no `Mutex`
/// or `RwLock` is needed for `records`. More importantly for this domain,
/// every resolve-guard-write sequence (status advance, soft delete) runs to
/// completion inside the loop before the next request is looked at, so
/// concurrent callers can never interleave between the guard and the write.
///
/// # Operations
///
/// * **Create** – assigns the next id, builds the record via
///   `from_create_params`, runs the `on_create` hook (which may consult other
///   stores through the context), and inserts only if the hook succeeds. A
///   failed validation therefore never persists anything.
/// * **Get** – clone-out read of one record.
/// * **List** – clone-out snapshot of every record.
/// * **Update** – runs `on_update` against the stored record in place.
/// * **Delete** – runs `on_delete`, then removes the record.
/// * **Action** – runs `handle_action` against the stored record in place.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mpsc channel. When the channel is
    ///   full, client calls wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple of the actor (the server, which must be driven via `.run()`)
    /// and the client, which can be cloned and shared freely.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This is how
    /// the order store reaches the cart store for existence checks: the cart
    /// client is created first and passed in here, not at construction time.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Cart" instead of
        // "cart_order_service::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                                continue;
                            }
                            self.records.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self.records.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.records.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.records.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        self.records.remove(&id);
                        info!(entity_type, %id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.records.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| StoreError::Entity(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cart, CartCreate, CartId, CartUpdate, UserId};

    #[tokio::test]
    async fn cart_store_crud_round_trip() {
        let (actor, client) = StoreActor::<Cart>::new(10);
        tokio::spawn(actor.run(()));

        // Create: the store assigns ids starting at 1.
        let cart = client
            .create(CartCreate {
                user_id: UserId(7),
            })
            .await
            .unwrap();
        assert_eq!(cart.cart_id.0, 1);
        assert_eq!(cart.user_id, UserId(7));

        // Get returns the stored record.
        let fetched = client.get(cart.cart_id).await.unwrap().unwrap();
        assert_eq!(fetched, cart);

        // Update replaces the owner.
        let updated = client
            .update(
                cart.cart_id,
                CartUpdate {
                    user_id: Some(UserId(9)),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.user_id, UserId(9));

        // List sees the single record.
        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user_id, UserId(9));

        // Delete removes it.
        client.delete(cart.cart_id).await.unwrap();
        assert!(client.get(cart.cart_id).await.unwrap().is_none());
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let (actor, client) = StoreActor::<Cart>::new(10);
        tokio::spawn(actor.run(()));

        let err = client
            .update(
                CartId(99),
                CartUpdate {
                    user_id: Some(UserId(1)),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "99"));

        let err = client.delete(CartId(99)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
