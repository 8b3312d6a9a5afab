use crate::directory::StoreUserDirectory;
use crate::framework::{StoreClient, StoreHandle};
use crate::model::UserProfile;
use crate::services::{CartService, OrderService};
use crate::{cart_store, directory, order_store};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the cart/order subsystem.
///
/// `CartOrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actors
/// - **Dependency Wiring**: injecting the cart store client into the order
///   store and the user directory into the cart service
/// - **Service Surface**: exposing the two services the Request Layer calls
///
/// # Architecture
///
/// Three store actors run underneath:
/// - **Profile store**: backs the in-process [`StoreUserDirectory`]
/// - **Cart store**: plain cart CRUD
/// - **Order store**: order records plus the lifecycle guards; holds a cart
///   store client as its context for existence checks
///
/// # Example
///
/// ```ignore
/// let system = CartOrderSystem::new();
///
/// let cart = system.cart_service.create_cart(CartCreate { user_id: UserId(1) }).await?;
/// let order = system.order_service.create_order(OrderDraft {
///     cart_id: Some(cart.cart_id),
///     ..OrderDraft::default()
/// }).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartOrderSystem {
    /// Cart aggregation service (CRUD + best-effort enrichment).
    pub cart_service: CartService,

    /// Order lifecycle service (state machine + soft delete).
    pub order_service: OrderService,

    /// Raw client of the profile store, for seeding the directory with users.
    pub users: StoreClient<UserProfile>,

    /// Task handles for all running store actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartOrderSystem {
    /// Creates and initializes a new `CartOrderSystem` with all store actors
    /// running.
    ///
    /// 1. Creates the profile, cart, and order stores
    /// 2. Spawns each actor in its own Tokio task, injecting the cart store
    ///    client into the order store as its context
    /// 3. Wires the cart service to a [`StoreUserDirectory`] over the
    ///    profile store
    pub fn new() -> Self {
        // 1. Create stores (no dependencies yet)
        let (user_actor, user_client) = directory::new();
        let (cart_actor, cart_client) = cart_store::new();
        let (order_actor, order_client) = order_store::new();

        // 2. Start actors with injected context.
        // Profiles and carts have no dependencies (Context = ()).
        let user_handle = tokio::spawn(user_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(()));

        // The order store needs a cart store client for existence checks
        // (Context = StoreClient<Cart>).
        let order_handle = tokio::spawn(order_actor.run(cart_client.inner().clone()));

        // 3. Wire the services.
        let user_directory = Arc::new(StoreUserDirectory::new(user_client.clone()));

        Self {
            cart_service: CartService::new(cart_client, user_directory),
            order_service: OrderService::new(order_client),
            users: user_client,
            handles: vec![user_handle, cart_handle, order_handle],
        }
    }

    /// Gracefully shuts down the whole subsystem.
    ///
    /// Dropping the services and clients closes the store channels; each
    /// actor drains its queue and exits its loop. The order store's exit also
    /// drops its cart client, which is what lets the cart store follow.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all store tasks shut down cleanly
    /// - `Err(String)` if any store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Close all channels by dropping every sender we hold.
        drop(self.order_service);
        drop(self.cart_service);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CartOrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
