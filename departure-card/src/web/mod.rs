//! Web layer for the departure card.
//!
//! Hosts one card instance over HTTP: configuration is installed with a
//! `PUT`, host snapshots are pushed through the change gate, and cards are
//! returned as HTML or JSON depending on the `Accept` header.

mod config;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use config::{ADDR_VAR, ServerConfig, ServerConfigError};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
