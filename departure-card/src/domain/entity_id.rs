//! Host entity identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque key into the host's entity state table.
///
/// The card never interprets the key; it is only used to look up state and
/// to name the entity in the "not available" placeholder.
///
/// # Examples
///
/// ```
/// use departure_card::domain::EntityId;
///
/// let id = EntityId::new("sensor.hauptbahnhof_departures");
/// assert_eq!(id.as_str(), "sensor.hauptbahnhof_departures");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap a host key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let id = EntityId::new("sensor.s1");
        assert_eq!(id.to_string(), "sensor.s1");
        assert_eq!(format!("{:?}", id), "EntityId(sensor.s1)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::from("sensor.s1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sensor.s1\"");

        let back: EntityId = serde_json::from_str("\"sensor.s1\"").unwrap();
        assert_eq!(back, id);
    }
}
