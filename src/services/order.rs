//! Order lifecycle: creation against an existing cart, the status state
//! machine, and the status-guarded soft delete.
//!
//! The guards themselves run inside the order store actor (entity hooks);
//! this service owns the operation surface the Request Layer calls, the
//! missing-cart argument check, and the active-only read views.

use crate::clients::OrderStore;
use crate::model::{Order, OrderCreate, OrderDraft, OrderId, OrderUpdate};
use crate::order_store::{OrderAction, OrderError};
use tracing::{debug, instrument};

/// Service for creating and mutating orders.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderStore,
}

impl OrderService {
    pub fn new(orders: OrderStore) -> Self {
        Self { orders }
    }

    /// All orders that have not been soft-deleted.
    #[instrument(skip(self))]
    pub async fn list_active_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders.find_all_active().await
    }

    /// One active order; fails `NotFound` whether the id never existed or
    /// was soft-deleted.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .find_active_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Creates an order from a draft.
    ///
    /// A draft without a cart reference is rejected here, before anything is
    /// sent to the store. The cart id is then resolved inside the order
    /// store's `on_create`; a non-existent cart fails `CartNotFound` with
    /// nothing persisted. The stored order comes back with `status =
    /// Created`, `is_active = true`, and a concrete `order_date`.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!(?draft, "create_order called");
        let cart_id = draft.cart_id.ok_or(OrderError::MissingCart)?;

        let params = OrderCreate {
            order_date: draft.order_date,
            order_desc: draft.order_desc,
            order_fee: draft.order_fee,
            cart_id,
        };
        self.orders.save(params).await
    }

    /// Moves the order's status one step forward; fails `InvalidTransition`
    /// once the order is in payment.
    #[instrument(skip(self))]
    pub async fn advance_status(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .perform(order_id, OrderAction::AdvanceStatus)
            .await
    }

    /// Merges the draft's mutable fields into the active order; identity
    /// fields and status are untouched. Re-pointing to a different cart
    /// re-resolves it exactly as in creation.
    #[instrument(skip(self, update))]
    pub async fn update_order(
        &self,
        order_id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        debug!(?update, "update_order called");
        self.orders.update(order_id, update).await
    }

    /// Soft delete: clears `is_active` so the order disappears from every
    /// active view while the record stays for history. Fails
    /// `PaymentInProgress` while the order is in payment.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        self.orders
            .perform(order_id, OrderAction::Deactivate)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockStore;

    #[tokio::test]
    async fn draft_without_cart_is_rejected_before_any_store_call() {
        // No expectations: the mock panics if anything reaches the store.
        let mock = MockStore::<Order>::new();
        let service = OrderService::new(OrderStore::new(mock.client()));

        let err = service
            .create_order(OrderDraft {
                order_desc: Some("no cart".into()),
                order_fee: Some(3000.0),
                ..OrderDraft::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, OrderError::MissingCart);
        mock.verify();
    }
}
