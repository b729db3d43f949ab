//! HTTP surface for the roost gallery.
//!
//! This crate provides:
//! - Page queries with merged claim status
//! - Single-item, traits and mint calldata lookups
//! - Per-digest claim cache lookups
//! - Cache statistics and Prometheus metrics

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
