//! Custom actions for the order store.
//!
//! The status-guarded mutations are modeled as Actions rather than plain
//! updates so they run through
//! [`StoreEntity::handle_action`](crate::framework::StoreEntity::handle_action)
//! inside the store actor: resolve, guard, and write happen in one turn of
//! the loop and concurrent callers are serialized.

/// Status-guarded operations on an order.
#[derive(Debug, Clone, Copy)]
pub enum OrderAction {
    /// Moves the status one step forward along
    /// `Created → Ordered → InPayment`.
    ///
    /// # Errors
    /// Fails with [`OrderError::InvalidTransition`](crate::order_store::OrderError::InvalidTransition)
    /// when the order is already in payment (or completed).
    AdvanceStatus,

    /// Soft delete: clears `is_active`, keeping the record for history.
    ///
    /// # Errors
    /// Fails with [`OrderError::PaymentInProgress`](crate::order_store::OrderError::PaymentInProgress)
    /// while the order is in payment; the record is left unchanged.
    Deactivate,
}
