//! # Cart & Order Service
//!
//! > **The cart/order core of an e-commerce platform, built as store actors.**
//!
//! This crate implements the order lifecycle state machine, the
//! cart-existence invariant behind order creation, and best-effort cart
//! enrichment from a user directory that is allowed to be down. Everything
//! wire-facing (HTTP routing, JSON mapping) belongs to an external Request
//! Layer; what lives here are the two services that layer calls and the
//! store/directory collaborators they consume.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Stores as Actors
//!
//! Every persistence collaborator (cart store, order store, profile store)
//! is an instance of one generic [`StoreActor`](framework::StoreActor):
//! isolated state behind a channel, messages processed sequentially.
//!
//! This buys the property the order lifecycle actually needs: *resolve,
//! guard, write* runs as one uninterrupted step inside the store. Two
//! concurrent status advances on the same order serialize; they can never
//! both observe `Created`. No locks, no optimistic version checks.
//!
//! ### Validation Where the Data Lives
//!
//! The cart-existence check runs in the order record's `on_create` hook,
//! *inside* the order store, against a cart store client injected at
//! `run()` time. An order whose cart does not resolve is never inserted;
//! there is no window where an invalid order exists.
//!
//! ### Failure Containment at the Enrichment Seam
//!
//! The user directory is modeled as a capability
//! ([`UserDirectory`](directory::UserDirectory)) whose result type
//! distinguishes "no such user" from "transport failure". The cart service
//! treats both identically: log, return the cart with no profile, keep
//! going. A dead directory degrades enrichment, never cart availability.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store machinery: [`StoreEntity`](framework::StoreEntity),
//! [`StoreActor`](framework::StoreActor),
//! [`StoreClient`](framework::StoreClient), and the
//! [`mock`](framework::mock) utilities for scripting store behavior in
//! tests.
//!
//! ### 2. The Records ([`model`])
//! Pure data: [`Cart`](model::Cart), [`Order`](model::Order) with its
//! [`OrderStatus`](model::OrderStatus) state machine and
//! [`CartRef`](model::CartRef) snapshot, [`UserProfile`](model::UserProfile),
//! and the DTOs the Request Layer maps onto.
//!
//! ### 3. The Stores ([`cart_store`], [`order_store`], [`directory`])
//! Entity implementations and per-resource error enums. The order store is
//! where the state machine guards and the cart invariant are enforced.
//!
//! ### 4. The Contracts ([`clients`])
//! Typed wrappers over the generic client, one per store contract:
//! [`CartStore`](clients::CartStore) (`find`/`find_all`/`save`/`update`/
//! `delete`) and [`OrderStore`](clients::OrderStore) (adds the active-only
//! views and the guarded actions).
//!
//! ### 5. The Services ([`services`])
//! [`CartService`](services::CartService) and
//! [`OrderService`](services::OrderService): the surface the Request Layer
//! translates to and from the wire.
//!
//! ### 6. The Orchestrator ([`runtime`])
//! [`CartOrderSystem`](runtime::CartOrderSystem) spawns and wires the
//! actors and owns graceful shutdown;
//! [`setup_tracing`](runtime::setup_tracing) configures logging.
//!
//! ## 🚀 Quick Start
//!
//! ```no_run
//! use cart_order_service::model::{CartCreate, OrderDraft, UserId};
//! use cart_order_service::runtime::CartOrderSystem;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = CartOrderSystem::new();
//!
//!     let cart = system
//!         .cart_service
//!         .create_cart(CartCreate { user_id: UserId(1) })
//!         .await
//!         .unwrap();
//!
//!     let order = system
//!         .order_service
//!         .create_order(OrderDraft {
//!             order_desc: Some("first order".into()),
//!             order_fee: Some(100.0),
//!             cart_id: Some(cart.cart_id),
//!             ..OrderDraft::default()
//!         })
//!         .await
//!         .unwrap();
//!
//!     let order = system.order_service.advance_status(order.order_id).await.unwrap();
//!     println!("order {} is now {:?}", order.order_id, order.status);
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod cart_store;
pub mod clients;
pub mod directory;
pub mod framework;
pub mod model;
pub mod order_store;
pub mod runtime;
pub mod services;
