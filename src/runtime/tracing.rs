//! # Observability & Tracing
//!
//! Structured logging setup for the whole subsystem.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, shutdown, and final record counts
//! - **Record Operations**: Create, Get, List, Update, Delete, and Actions,
//!   with entity type and id as structured fields
//! - **Service Spans**: every public service operation opens a span via
//!   `#[tracing::instrument]`
//! - **Contained Failures**: directory lookups that fail during enrichment
//!   are logged at error level right where they are swallowed; the log line
//!   is the only trace they leave
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo test -- --nocapture
//!
//! # Filter to the store framework only
//! RUST_LOG=cart_order_service::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` an order creation traces end to end:
//!
//! ```text
//! DEBUG create_order called draft=OrderDraft { order_desc: Some("A"), order_fee: Some(100.0), cart_id: Some(CartId(1)), .. }
//! DEBUG Create params=OrderCreate { .. }
//! DEBUG Get id=1 found=true        <- cart existence check inside on_create
//! INFO  Created id=1 size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields carry the context instead
        .compact()
        .init();
}
