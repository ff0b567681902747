//! Host entity state DTOs.
//!
//! These types map directly to the state objects the dashboard host keeps
//! for a departure board entity. They use `Option` liberally because the
//! host omits attributes rather than sending null values in many cases.

use serde::Deserialize;
use serde_json::Value;

/// One entity state object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntityState {
    /// Entity attributes (name, departures, ...).
    pub attributes: Option<RawAttributes>,
}

/// Attributes of a departure board entity.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttributes {
    /// Display name assigned by the host.
    ///
    /// Untyped: a name of the wrong type is dropped, not the entity.
    pub friendly_name: Option<Value>,

    /// Upcoming departures, earliest first.
    ///
    /// Kept untyped so one malformed record does not reject the others.
    pub next: Option<Vec<Value>>,
}

/// One entry of the `next` attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeparture {
    /// Line label (e.g., "S1").
    pub line: Option<String>,

    /// Direction or terminus.
    pub direction: Option<String>,

    /// Vehicle category (e.g., "S", "Bus").
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,

    /// Scheduled departure as an RFC 3339 timestamp.
    pub departure: Option<String>,

    /// Delay in seconds. Usually an integer, sometimes a whole float.
    pub delay: Option<Value>,
}
