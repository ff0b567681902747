//! Stateful card adapter.
//!
//! Holds the accepted configuration and the last host snapshot, applies the
//! change gate, and hands each fresh [`CardView`] to an injected renderer.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{ConfigError, WidgetConfig};
use crate::host::HostState;
use crate::plan::{CARD_SIZE, CardView, build_view, has_config_or_entity_changed};

/// Turns a card view into output for the host.
pub trait CardRenderer {
    /// Rendered card (markup, a serialized view, ...).
    type Output;

    fn render(&self, view: &CardView) -> Self::Output;
}

/// Renderer that hands the view back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewRenderer;

impl CardRenderer for ViewRenderer {
    type Output = CardView;

    fn render(&self, view: &CardView) -> CardView {
        view.clone()
    }
}

/// One card instance.
pub struct DepartureCard<R> {
    renderer: R,
    config: Option<WidgetConfig>,
    config_changed: bool,
    last_state: Option<HostState>,
}

impl<R: CardRenderer> DepartureCard<R> {
    /// Create an unconfigured card around a renderer.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            config: None,
            config_changed: false,
            last_state: None,
        }
    }

    /// The accepted configuration, if any.
    pub fn config(&self) -> Option<&WidgetConfig> {
        self.config.as_ref()
    }

    /// Validate and install a new configuration.
    ///
    /// A rejected configuration leaves the previous one in place.
    pub fn set_config(&mut self, raw: &Value) -> Result<&WidgetConfig, ConfigError> {
        let config = WidgetConfig::try_from(raw)?;
        info!(entities = config.entities().len(), "Card configured");

        self.config_changed |= self.config.as_ref() != Some(&config);
        Ok(self.config.insert(config))
    }

    /// Accept a new host snapshot and render if anything relevant changed.
    ///
    /// Returns `None` when the card is unconfigured or the gate skips the
    /// pass. The snapshot is kept for the next comparison either way.
    pub fn update<Tz>(&mut self, state: HostState, now: &DateTime<Tz>) -> Option<R::Output>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let config = self.config.as_ref()?;

        let changed = has_config_or_entity_changed(
            config,
            self.config_changed,
            self.last_state.as_ref(),
            &state,
        );
        self.last_state = Some(state);

        if !changed {
            debug!("No relevant change, skipping render");
            return None;
        }

        self.config_changed = false;
        self.render_current(now)
    }

    /// Render the last snapshot without consulting the gate.
    pub fn render_current<Tz>(&self, now: &DateTime<Tz>) -> Option<R::Output>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let config = self.config.as_ref()?;
        let state = self.last_state.as_ref()?;
        Some(self.renderer.render(&build_view(config, state, now)))
    }

    /// Layout size reported to the host.
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }
}

impl<R: fmt::Debug> fmt::Debug for DepartureCard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepartureCard")
            .field("renderer", &self.renderer)
            .field("config", &self.config)
            .field("config_changed", &self.config_changed)
            .field("has_state", &self.last_state.is_some())
            .finish()
    }
}
