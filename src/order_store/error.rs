//! Error types for the order store.

use crate::model::InvalidTransition;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// The variants carry the three domain signals the Request Layer translates
/// into client-facing responses: not-found (`NotFound`, `CartNotFound`),
/// invalid argument (`MissingCart`), and invalid state (`InvalidTransition`,
/// `PaymentInProgress`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found or is soft-deleted.
    #[error("order not found: {0}")]
    NotFound(String),

    /// The creation payload carried no cart reference at all.
    #[error("order payload has no cart reference")]
    MissingCart,

    /// The cart the order points at does not exist in the cart store.
    #[error("cart not found: {0}")]
    CartNotFound(String),

    /// A status advance was attempted from a state with no outbound
    /// transition.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// Deletion was attempted while payment is underway.
    #[error("order {0} is in payment and cannot be deleted")]
    PaymentInProgress(String),

    /// The order store or the cart store it consults was unreachable.
    #[error("order store unavailable: {0}")]
    Store(String),
}
