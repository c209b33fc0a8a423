//! HTTP surface of the weather proxy.
//!
//! The binary in `main.rs` wires configuration and logging around the
//! router built here; tests drive the router directly.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
