//! Change detection ahead of a render pass.

use crate::config::WidgetConfig;
use crate::host::HostState;

/// Whether a new host snapshot warrants a render pass.
///
/// A pass is needed when the configuration changed, when there is no
/// previous snapshot to compare against, or when the state of at least one
/// configured entity differs between the two snapshots. Changes to entities
/// the card does not show are ignored.
pub fn has_config_or_entity_changed(
    config: &WidgetConfig,
    config_changed: bool,
    previous: Option<&HostState>,
    current: &HostState,
) -> bool {
    if config_changed {
        return true;
    }

    let Some(previous) = previous else {
        return true;
    };

    config
        .entities()
        .iter()
        .any(|id| previous.get(id) != current.get(id))
}
