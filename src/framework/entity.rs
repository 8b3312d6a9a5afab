//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every persisted record type (Cart,
//! Order, UserProfile) must implement to be managed by the generic
//! [`StoreActor`](crate::framework::StoreActor). It specifies associated types
//! for ids, DTOs, actions, context, and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`). Implementing this
//! trait gives the framework a uniform CRUD + Action API over any record type.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `StoreActor`.
///
/// # Architecture Note
/// By defining one contract that all our record types (Cart, Order,
/// UserProfile) satisfy, we write the store loop *once* and reuse it for every
/// store in the system.
///
/// We use associated types (`type Id`, `type Create`, ...) to enforce type
/// safety: a cart store only accepts cart payloads, and the compiler rejects
/// anything else.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other stores. The `Context`
/// type is injected into every hook at `run()` time rather than at
/// construction time ("late binding"), which is how the order store receives a
/// cart store client for existence checks without a circular setup.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for store-side id assignment.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Enum of record-specific operations beyond CRUD (e.g. `AdvanceStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// # Design Note: Error Granularity
    /// The framework enforces a **per-store error type** (one enum for the
    /// whole store) rather than per-message error types. One `OrderError`
    /// covers every order operation; callers pattern-match on the variants
    /// they care about. The theoretical loss of precision (an action that can
    /// only fail one way still returns the full enum) is worth the reduction
    /// in boilerplate.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is constructed and before it is inserted.
    /// Use this hook for validation or side effects against other stores;
    /// a failure here means the record is never persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
