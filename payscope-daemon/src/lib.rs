//! payscope daemon - read-only HTTP query surface over the analytics views.
//!
//! This library provides:
//! - The axum router serving every analytics view as JSON
//! - A `serve` helper shared by the daemon binary and `payscope serve`

pub mod server;

pub use server::{create_router, serve, AppState};
