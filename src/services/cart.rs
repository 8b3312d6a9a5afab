//! Cart aggregation: CRUD over carts plus best-effort user enrichment on the
//! read paths.
//!
//! The defining design decision of this service is containment: a user
//! directory failure degrades enrichment quality, never cart availability.
//! Both a transport failure and a missing profile leave `profile` absent on
//! the returned view; neither is ever surfaced as a service error.

use crate::cart_store::CartError;
use crate::clients::CartStore;
use crate::directory::UserDirectory;
use crate::framework::StoreHandle;
use crate::model::{Cart, CartCreate, CartId, CartUpdate, EnrichedCart};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Service for reading and writing carts, enriched with user profiles when
/// the directory can supply them.
#[derive(Clone)]
pub struct CartService {
    carts: CartStore,
    directory: Arc<dyn UserDirectory>,
}

impl CartService {
    pub fn new(carts: CartStore, directory: Arc<dyn UserDirectory>) -> Self {
        Self { carts, directory }
    }

    /// Returns every cart, each enriched best-effort.
    ///
    /// A failed lookup for one cart neither removes that cart from the
    /// result nor aborts the remaining enrichments; the loop logs and moves
    /// on.
    #[instrument(skip(self))]
    pub async fn list_carts(&self) -> Result<Vec<EnrichedCart>, CartError> {
        let carts = self.carts.find_all().await?;
        let mut enriched = Vec::with_capacity(carts.len());
        for cart in carts {
            enriched.push(self.enrich(cart).await);
        }
        Ok(enriched)
    }

    /// Returns one cart with enrichment attempted.
    ///
    /// Fails `NotFound` only when the cart id itself does not resolve; a
    /// directory failure still returns the cart, profile absent.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, cart_id: CartId) -> Result<EnrichedCart, CartError> {
        let cart = self
            .carts
            .find(cart_id)
            .await?
            .ok_or_else(|| CartError::NotFound(cart_id.to_string()))?;
        Ok(self.enrich(cart).await)
    }

    /// Persists a new cart and returns it.
    ///
    /// No enrichment on this path; callers re-fetch when they want the
    /// profile.
    #[instrument(skip(self, params))]
    pub async fn create_cart(&self, params: CartCreate) -> Result<Cart, CartError> {
        debug!(?params, "create_cart called");
        self.carts.save(params).await
    }

    /// Replaces the stored fields of the cart identified by the payload's
    /// own id.
    #[instrument(skip(self, cart))]
    pub async fn update_cart(&self, cart: Cart) -> Result<Cart, CartError> {
        debug!(?cart, "update_cart called");
        self.carts
            .update(
                cart.cart_id,
                CartUpdate {
                    user_id: Some(cart.user_id),
                },
            )
            .await
    }

    /// Replaces the stored fields of the cart at `cart_id` with the supplied
    /// payload, keeping the resolved identity. Fails `NotFound` if the id
    /// does not resolve.
    #[instrument(skip(self, update))]
    pub async fn update_cart_by_id(
        &self,
        cart_id: CartId,
        update: CartUpdate,
    ) -> Result<Cart, CartError> {
        debug!(?update, "update_cart_by_id called");
        self.carts.update(cart_id, update).await
    }

    /// Removes the cart unconditionally; fails `NotFound` if it did not
    /// exist. Orders keep their snapshots of it either way.
    #[instrument(skip(self))]
    pub async fn delete_cart(&self, cart_id: CartId) -> Result<(), CartError> {
        self.carts.delete(cart_id).await
    }

    /// One outbound directory call; failure and absence both collapse to "no
    /// profile".
    async fn enrich(&self, cart: Cart) -> EnrichedCart {
        match self.directory.get_user(cart.user_id).await {
            Ok(profile) => {
                if profile.is_none() {
                    warn!(user_id = %cart.user_id, "user directory has no profile for cart owner");
                }
                EnrichedCart { cart, profile }
            }
            Err(e) => {
                error!(user_id = %cart.user_id, error = %e, "user directory lookup failed; returning cart without profile");
                EnrichedCart {
                    cart,
                    profile: None,
                }
            }
        }
    }
}
