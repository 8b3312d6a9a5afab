//! StoreEntity implementation for the Order record.
//!
//! This is where the cross-entity invariant and the state machine are
//! enforced: `on_create` refuses to persist an order whose cart does not
//! resolve, `on_update` merges mutable fields and re-resolves the cart when
//! re-pointed, and `handle_action` applies the status-guarded transitions.
//! The context injected at run time is a raw cart store client: the order
//! side depends on the cart *store* only, never on the cart service.

use crate::framework::{StoreClient, StoreEntity};
use crate::model::{Cart, CartId, CartRef, Order, OrderCreate, OrderStatus, OrderUpdate, UserId};
use crate::order_store::{OrderAction, OrderError};
use async_trait::async_trait;
use chrono::Utc;

/// Resolves a cart id against the cart store, mapping both "store says no
/// such cart" and "store unreachable" into order-domain errors.
async fn resolve_cart(
    cart_store: &StoreClient<Cart>,
    cart_id: CartId,
) -> Result<Cart, OrderError> {
    cart_store
        .get(cart_id)
        .await
        .map_err(|e| OrderError::Store(e.to_string()))?
        .ok_or_else(|| OrderError::CartNotFound(cart_id.to_string()))
}

#[async_trait]
impl StoreEntity for Order {
    type Id = crate::model::OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = StoreClient<Cart>;
    type Error = OrderError;

    /// Builds the order snapshot with the caller-controllable fields from the
    /// payload and everything else forced: status starts at `Created`, the
    /// order is active, and the date defaults to now.
    ///
    /// The cart's `user_id` is a placeholder until `on_create` resolves the
    /// cart; the record is only inserted once that succeeds.
    fn from_create_params(id: Self::Id, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            order_id: id,
            order_date: params.order_date.unwrap_or_else(Utc::now),
            order_desc: params.order_desc,
            order_fee: params.order_fee,
            is_active: true,
            status: OrderStatus::Created,
            cart: CartRef {
                cart_id: params.cart_id,
                user_id: UserId(0),
            },
        })
    }

    /// Enforces the cart-existence invariant: the order is persisted only if
    /// its cart resolves right now, and the snapshot is taken from the
    /// *resolved* cart, not from whatever the caller sent.
    async fn on_create(&mut self, cart_store: &Self::Context) -> Result<(), OrderError> {
        let cart = resolve_cart(cart_store, self.cart.cart_id).await?;
        self.cart = CartRef::from(&cart);
        Ok(())
    }

    /// Merges the mutable fields: supplied values replace, omitted values
    /// keep. A different cart id re-resolves and re-snapshots exactly as in
    /// creation; the same id (or none) preserves the existing snapshot.
    ///
    /// Soft-deleted orders behave as deleted on this path.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        cart_store: &Self::Context,
    ) -> Result<(), OrderError> {
        if !self.is_active {
            return Err(OrderError::NotFound(self.order_id.to_string()));
        }

        // Resolve first so a bad cart id leaves the record untouched.
        if let Some(cart_id) = update.cart_id {
            if cart_id != self.cart.cart_id {
                let cart = resolve_cart(cart_store, cart_id).await?;
                self.cart = CartRef::from(&cart);
            }
        }
        if let Some(desc) = update.order_desc {
            self.order_desc = Some(desc);
        }
        if let Some(fee) = update.order_fee {
            self.order_fee = Some(fee);
        }
        if let Some(date) = update.order_date {
            self.order_date = date;
        }
        Ok(())
    }

    /// Applies the status-guarded mutations. Soft-deleted orders behave as
    /// deleted here too, so a deactivated order can be neither advanced nor
    /// deactivated again.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<Order, OrderError> {
        if !self.is_active {
            return Err(OrderError::NotFound(self.order_id.to_string()));
        }

        match action {
            OrderAction::AdvanceStatus => {
                self.status = self.status.advance()?;
            }
            OrderAction::Deactivate => {
                if self.status == OrderStatus::InPayment {
                    return Err(OrderError::PaymentInProgress(self.order_id.to_string()));
                }
                self.is_active = false;
            }
        }
        Ok(self.clone())
    }
}
