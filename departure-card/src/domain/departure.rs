//! Validated departure records and entity state.

use chrono::{DateTime, Utc};

/// One scheduled departure as reported by a departure board entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRecord {
    /// Line label (e.g., "S1", "U3", "X35")
    pub line: String,

    /// Direction or terminus shown to passengers
    pub direction: String,

    /// Vehicle category (e.g., "S", "U", "Bus", "Schiff").
    /// Not validated; unknown categories are kept as-is.
    pub vehicle_type: String,

    /// Scheduled departure time
    pub scheduled_at: DateTime<Utc>,

    /// Delay in seconds; zero means on time, negative means early
    pub delay_seconds: i64,
}

impl DepartureRecord {
    /// Create an on-time departure.
    pub fn new(
        line: impl Into<String>,
        direction: impl Into<String>,
        vehicle_type: impl Into<String>,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            line: line.into(),
            direction: direction.into(),
            vehicle_type: vehicle_type.into(),
            scheduled_at,
            delay_seconds: 0,
        }
    }

    /// Set the delay in seconds.
    pub fn with_delay(mut self, delay_seconds: i64) -> Self {
        self.delay_seconds = delay_seconds;
        self
    }
}

/// The typed view of one departure board entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityState {
    /// Human-readable entity name, if the host provides one
    pub friendly_name: Option<String>,

    /// Departures in source order (assumed earliest first, never re-sorted)
    pub departures: Vec<DepartureRecord>,
}
