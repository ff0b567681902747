//! Projection of a configured entity through host state.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::warn;

use crate::config::WidgetConfig;
use crate::domain::EntityId;
use crate::host::{HostState, convert_entity_state};

use super::rows::{RenderRow, build_rows};

/// The typed view of one configured entity, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntityProjection {
    /// The entity exists. `rows` may be empty when nothing is scheduled.
    Found {
        entity_id: EntityId,
        friendly_name: Option<String>,
        rows: Vec<RenderRow>,
    },

    /// The entity is absent from host state, or its state is unusable.
    NotFound { entity_id: EntityId },
}

impl EntityProjection {
    /// The configured entity this projection is for.
    pub fn entity_id(&self) -> &EntityId {
        match self {
            EntityProjection::Found { entity_id, .. }
            | EntityProjection::NotFound { entity_id } => entity_id,
        }
    }

    /// Whether the entity was found.
    pub fn is_found(&self) -> bool {
        matches!(self, EntityProjection::Found { .. })
    }

    /// Rows of a found entity, `None` for a missing one.
    pub fn rows(&self) -> Option<&[RenderRow]> {
        match self {
            EntityProjection::Found { rows, .. } => Some(rows),
            EntityProjection::NotFound { .. } => None,
        }
    }
}

/// Resolve one configured entity against a host snapshot.
///
/// Never fails: an absent entity, or one whose state object cannot be
/// converted, becomes [`EntityProjection::NotFound`] so that sibling
/// entities still render.
pub fn project<Tz>(
    entity_id: &EntityId,
    host: &HostState,
    config: &WidgetConfig,
    now: &DateTime<Tz>,
) -> EntityProjection
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let not_found = || EntityProjection::NotFound {
        entity_id: entity_id.clone(),
    };

    let Some(state) = host.get(entity_id) else {
        return not_found();
    };

    let state = match convert_entity_state(state) {
        Ok(state) => state,
        Err(e) => {
            warn!(entity = %entity_id, error = %e, "Unusable entity state");
            return not_found();
        }
    };

    EntityProjection::Found {
        entity_id: entity_id.clone(),
        rows: build_rows(&state.departures, config.max(), config, now),
        friendly_name: state.friendly_name,
    }
}
