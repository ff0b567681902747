//! Conversion from host state DTOs to domain types.
//!
//! This is the only place that looks at untyped host data. Malformed
//! departure records are skipped individually; an entity whose state object
//! has the wrong shape is rejected as a whole.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{DepartureRecord, EntityState};

use super::types::{RawDeparture, RawEntityState};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The state object does not have the expected structure
    #[error("invalid entity state: {0}")]
    InvalidState(String),

    /// A departure record is not an object with the expected fields
    #[error("invalid departure: {0}")]
    InvalidDeparture(String),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a timestamp
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

/// Convert one host state object into a typed [`EntityState`].
///
/// Missing attributes or a missing `next` list yield an entity with no
/// departures. Records that fail to convert are logged and skipped.
pub fn convert_entity_state(state: &Value) -> Result<EntityState, ConversionError> {
    if !state.is_object() {
        return Err(ConversionError::InvalidState(
            "state must be an object".to_string(),
        ));
    }

    let raw = RawEntityState::deserialize(state)
        .map_err(|e| ConversionError::InvalidState(e.to_string()))?;

    let Some(attributes) = raw.attributes else {
        return Ok(EntityState::default());
    };

    let records = attributes.next.as_deref().unwrap_or(&[]);
    let mut departures = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        match convert_departure(record) {
            Ok(departure) => departures.push(departure),
            Err(e) => {
                warn!(index = idx, error = %e, "Skipping departure record");
            }
        }
    }

    Ok(EntityState {
        friendly_name: attributes
            .friendly_name
            .as_ref()
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        departures,
    })
}

/// Convert a single entry of the `next` attribute.
pub fn convert_departure(record: &Value) -> Result<DepartureRecord, ConversionError> {
    let raw = RawDeparture::deserialize(record)
        .map_err(|e| ConversionError::InvalidDeparture(e.to_string()))?;

    let line = raw.line.ok_or(ConversionError::MissingField("line"))?;
    let departure = raw
        .departure
        .ok_or(ConversionError::MissingField("departure"))?;
    let scheduled_at = parse_timestamp(&departure)?;

    Ok(DepartureRecord {
        line,
        direction: raw.direction.unwrap_or_default(),
        vehicle_type: raw.vehicle_type.unwrap_or_default(),
        scheduled_at,
        delay_seconds: raw.delay.as_ref().map_or(0, parse_delay),
    })
}

/// Read a delay in whole seconds.
///
/// Integers and floats without a fractional part are accepted. Anything else
/// counts as on time so the departure itself is still shown.
fn parse_delay(value: &Value) -> i64 {
    let seconds = match value {
        Value::Null => return 0,
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };

    seconds.unwrap_or_else(|| {
        warn!(delay = %value, "Ignoring unusable delay");
        0
    })
}

/// Parse an RFC 3339 timestamp into UTC.
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ConversionError::InvalidTime(s.to_string()))
}
