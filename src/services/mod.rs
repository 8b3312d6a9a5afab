//! The two core services the Request Layer talks to.

pub mod cart;
pub mod order;

pub use cart::*;
pub use order::*;
