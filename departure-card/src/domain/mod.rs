//! Domain types for the departure card.
//!
//! This module contains the validated types the render pipeline works on.
//! Raw host data is converted into these types in [`crate::host`] before any
//! core logic runs, so code receiving them can trust their shape.

mod departure;
mod duration;
mod entity_id;

pub use departure::{DepartureRecord, EntityState};
pub use duration::{CompactDuration, NOW, format_duration};
pub use entity_id::EntityId;
