use crate::model::cart::{Cart, CartId};
use crate::model::status::OrderStatus;
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// By-value snapshot of the cart an order was placed against.
///
/// The identity fields are copied out of the resolved cart at write time;
/// there is no live link, so later cart mutations do not retroactively change
/// an order's recorded cart unless the order is explicitly re-pointed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRef {
    pub cart_id: CartId,
    pub user_id: UserId,
}

impl From<&Cart> for CartRef {
    fn from(cart: &Cart) -> Self {
        Self {
            cart_id: cart.cart_id,
            user_id: cart.user_id,
        }
    }
}

/// A purchase record derived from a cart snapshot, carrying its own
/// lifecycle status.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity)
/// trait (see [`crate::order_store`]); the status guards and the cart
/// existence check live in its hooks so they run inside the store actor.
///
/// `is_active = false` marks a soft-deleted order: the record stays in the
/// store for history but is excluded from every active view and from every
/// lookup-for-mutation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub order_date: DateTime<Utc>,
    pub order_desc: Option<String>,
    pub order_fee: Option<f64>,
    pub is_active: bool,
    pub status: OrderStatus,
    pub cart: CartRef,
}

/// Inbound creation payload as the Request Layer hands it over.
///
/// The cart reference is optional *here* because callers may omit it; the
/// service rejects such drafts before anything reaches the store. There are
/// deliberately no id or status fields: whatever the caller thinks those
/// should be is discarded by construction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDraft {
    pub order_date: Option<DateTime<Utc>>,
    pub order_desc: Option<String>,
    pub order_fee: Option<f64>,
    pub cart_id: Option<CartId>,
}

/// Validated creation payload sent to the order store.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub order_date: Option<DateTime<Utc>>,
    pub order_desc: Option<String>,
    pub order_fee: Option<f64>,
    pub cart_id: CartId,
}

/// Payload for updating an order's mutable fields.
///
/// Supplied fields replace the stored value, omitted fields keep it.
/// Supplying `cart_id` re-points the order at another cart, which is
/// re-resolved against the cart store exactly as in creation. Identity
/// fields (`order_id`, `status`, `is_active`) are not reachable from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order_date: Option<DateTime<Utc>>,
    pub order_desc: Option<String>,
    pub order_fee: Option<f64>,
    pub cart_id: Option<CartId>,
}
