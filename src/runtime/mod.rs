//! Runtime orchestration and lifecycle management.
//!
//! This module wires the subsystem together:
//!
//! - **Store lifecycle**: starting, wiring, and shutting down the store actors
//! - **Dependency injection**: cart store client into the order store,
//!   user directory into the cart service
//! - **Observability setup**: initializing tracing
//!
//! # Main Components
//!
//! - [`CartOrderSystem`] - the orchestrator owning all actors and services
//! - [`setup_tracing`] - tracing/logging initialization

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
