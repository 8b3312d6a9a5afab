//! # Framework Errors
//!
//! Common error types used throughout the store framework. Centralizing them
//! keeps error handling consistent across every store and client.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store closed")]
    StoreClosed,
    #[error("store dropped response channel")]
    StoreDropped,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("entity error: {0}")]
    Entity(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recover the typed entity error a hook raised, if this is one.
    ///
    /// Typed wrappers use this to hand the Request Layer the exact domain
    /// variant (`NotFound` vs `InvalidTransition` vs ...) instead of a
    /// stringly `Entity` wrapper.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::Entity(boxed) => boxed.downcast::<E>().map(|e| *e).map_err(Self::Entity),
            other => Err(other),
        }
    }
}
