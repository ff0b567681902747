//! Departure rows for one entity.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::config::WidgetConfig;
use crate::domain::DepartureRecord;

use super::time::resolve_time_text;

/// Render data for one departure row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    /// Line label shown in the badge
    pub line_label: String,

    /// Vehicle category used as a styling discriminator
    pub type_class: String,

    /// Direction or terminus
    pub direction: String,

    /// Clock time or countdown
    pub time_text: String,

    /// Delay annotation shown as a suffix
    pub delay_text: Option<String>,

    /// Whether `delay_text` is set
    pub has_delay: bool,
}

impl RenderRow {
    /// Build the row for one departure.
    pub fn from_departure<Tz>(
        departure: &DepartureRecord,
        show_time: bool,
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let time = resolve_time_text(
            departure.scheduled_at,
            departure.delay_seconds,
            show_time,
            now,
        );

        Self {
            line_label: departure.line.clone(),
            type_class: departure.vehicle_type.clone(),
            direction: departure.direction.clone(),
            has_delay: time.has_delay(),
            time_text: time.text,
            delay_text: time.delay,
        }
    }
}

/// Build rows for the first `max` departures, in source order.
///
/// Departures are only cut by position: there is no sorting and no
/// filtering by type or time window. An empty input yields no rows.
pub fn build_rows<Tz>(
    departures: &[DepartureRecord],
    max: usize,
    config: &WidgetConfig,
    now: &DateTime<Tz>,
) -> Vec<RenderRow>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    departures
        .iter()
        .take(max)
        .map(|d| RenderRow::from_departure(d, config.show_time(), now))
        .collect()
}
