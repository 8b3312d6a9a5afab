//! StoreEntity implementation for the Cart record.
//!
//! Carts are plain CRUD with no custom actions and no dependencies; the
//! interesting behavior of the cart side (user enrichment) lives in
//! [`crate::services::CartService`], outside the store.

use crate::cart_store::CartError;
use crate::framework::StoreEntity;
use crate::model::{Cart, CartCreate, CartUpdate};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for Cart {
    type Id = crate::model::CartId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: Self::Id, params: CartCreate) -> Result<Self, CartError> {
        Ok(Self {
            cart_id: id,
            user_id: params.user_id,
        })
    }

    /// Replaces the owner. The cart id is store-assigned and stays put.
    async fn on_update(&mut self, update: CartUpdate, _ctx: &()) -> Result<(), CartError> {
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }
}
