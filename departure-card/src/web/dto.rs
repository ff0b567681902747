//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::HostState;

/// Request to render a card without touching the hosted instance.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Raw widget configuration
    pub config: Value,

    /// Host state snapshot
    #[serde(default)]
    pub states: HostState,
}

/// Response for the layout size query.
#[derive(Debug, Serialize)]
pub struct CardSizeResponse {
    /// Layout grid size
    pub size: u32,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityId;
    use serde_json::json;

    #[test]
    fn render_request_states_default_to_empty() {
        let req: RenderRequest =
            serde_json::from_value(json!({ "config": { "entities": ["sensor.a"] } })).unwrap();
        assert!(req.states.is_empty());
    }

    #[test]
    fn render_request_with_states() {
        let req: RenderRequest = serde_json::from_value(json!({
            "config": { "entities": ["sensor.a"] },
            "states": { "sensor.a": { "attributes": {} } }
        }))
        .unwrap();
        assert!(req.states.get(&EntityId::new("sensor.a")).is_some());
    }
}
