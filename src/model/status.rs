use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of an order.
///
/// The status only moves forward, one step at a time:
///
/// | Current   | Advance →   |
/// |-----------|-------------|
/// | Created   | Ordered     |
/// | Ordered   | InPayment   |
/// | InPayment | rejected    |
///
/// `Completed` is part of the domain but has no inbound transition through
/// [`OrderStatus::advance`]; like `InPayment` it rejects a further advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Ordered,
    InPayment,
    Completed,
}

/// Rejection returned when no transition is defined out of the current
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no status transition defined out of {from:?}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
}

impl OrderStatus {
    /// The single-step transition function for the order state machine.
    ///
    /// Pure: returns the next status or a typed rejection, so the table
    /// above is testable without a store.
    pub fn advance(self) -> Result<Self, InvalidTransition> {
        match self {
            Self::Created => Ok(Self::Ordered),
            Self::Ordered => Ok(Self::InPayment),
            Self::InPayment | Self::Completed => Err(InvalidTransition { from: self }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_walks_the_table_forward() {
        assert_eq!(OrderStatus::Created.advance(), Ok(OrderStatus::Ordered));
        assert_eq!(OrderStatus::Ordered.advance(), Ok(OrderStatus::InPayment));
    }

    #[test]
    fn advance_rejects_terminal_states() {
        assert_eq!(
            OrderStatus::InPayment.advance(),
            Err(InvalidTransition {
                from: OrderStatus::InPayment
            })
        );
        assert_eq!(
            OrderStatus::Completed.advance(),
            Err(InvalidTransition {
                from: OrderStatus::Completed
            })
        );
    }
}
