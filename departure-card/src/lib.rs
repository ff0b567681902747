//! Public-transit departure card.
//!
//! Turns departure board entities from a dashboard host into a compact,
//! time-relative card: "S1 Blankenese 2min", "U3 Barmbek 1h 05min".

pub mod card;
pub mod config;
pub mod domain;
pub mod host;
pub mod plan;
pub mod web;
