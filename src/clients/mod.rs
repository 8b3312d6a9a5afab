//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient),
//! one per store contract.

pub mod cart_store;
pub mod order_store;

pub use cart_store::*;
pub use order_store::*;
