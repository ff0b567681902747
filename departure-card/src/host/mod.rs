//! Host dashboard state.
//!
//! The host keeps one state object per entity and hands the card a fresh
//! snapshot on every change. Key characteristics of that data:
//! - State objects are loosely shaped; attributes may be missing
//! - Departures live in the `next` attribute, earliest first
//! - Timestamps are RFC 3339 strings, delays are integer seconds

mod convert;
mod state;
mod types;

pub use convert::{ConversionError, convert_departure, convert_entity_state};
pub use state::HostState;
pub use types::{RawAttributes, RawDeparture, RawEntityState};
