//! Error types for the cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("cart not found: {0}")]
    NotFound(String),

    /// The cart store itself was unreachable (closed channel, dropped
    /// response).
    #[error("cart store unavailable: {0}")]
    Store(String),
}
