//! A full render pass over all configured entities.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::host::HostState;

use super::project::{EntityProjection, project};

/// Layout size reported to the host. Constant, not derived from row count.
pub const CARD_SIZE: u32 = 1;

/// Everything the rendering layer needs for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Header text, `None` when the header is hidden
    pub header: Option<String>,

    /// Whether entity names are shown
    pub show_name: bool,

    /// One projection per configured entity, in configuration order
    pub entities: Vec<EntityProjection>,
}

/// Run the pipeline for every configured entity.
///
/// A missing entity only affects its own slot.
pub fn build_view<Tz>(config: &WidgetConfig, host: &HostState, now: &DateTime<Tz>) -> CardView
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let entities: Vec<EntityProjection> = config
        .entities()
        .iter()
        .map(|id| project(id, host, config, now))
        .collect();

    debug!(
        entities = entities.len(),
        missing = entities.iter().filter(|e| !e.is_found()).count(),
        "Built card view"
    );

    CardView {
        header: config.header().map(str::to_string),
        show_name: config.show_name(),
        entities,
    }
}
