//! Generic store framework.
//!
//! Each persistence collaborator in the system (cart store, order store,
//! user-profile store) is an instance of the same machinery defined here: a
//! [`StoreActor`] owning the records and processing requests sequentially,
//! driven through a cloneable [`StoreClient`].
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that record types implement to be managed by a store
//! - [`StoreActor`] - Generic store actor owning the records
//! - [`StoreClient`] - Type-safe async client
//! - [`StoreHandle`] - Shared read/delete surface for typed wrappers
//! - [`StoreError`] - Common framework errors
//!
//! # Testing
//!
//! See the [`mock`] module for scripting store behavior without a live actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Respond, StoreRequest};
