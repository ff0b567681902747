//! Departure render pipeline.
//!
//! Turns a validated configuration and a host snapshot into an ordered,
//! bounded list of rows per entity:
//!
//! 1. [`project`] looks each configured entity up and converts its state
//! 2. [`build_rows`] keeps the first `max` departures in source order
//! 3. [`resolve_time_text`] picks a clock time or countdown for each row
//!
//! Every step is pure and takes `now` explicitly. [`has_config_or_entity_changed`]
//! decides whether a pass is needed at all.

mod gate;
mod project;
mod rows;
mod time;
mod view;

#[cfg(test)]
mod pipeline_tests;

pub use gate::has_config_or_entity_changed;
pub use project::{EntityProjection, project};
pub use rows::{RenderRow, build_rows};
pub use time::{CLOCK_FORMAT, DepartureTime, resolve_time_text};
pub use view::{CARD_SIZE, CardView, build_view};
