//! Coffer-api: HTTP API layer for Coffer
//!
//! Exposes the contribution ledger and oracle price over a RESTful API.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
