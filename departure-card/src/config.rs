//! Widget configuration and its validation.
//!
//! The card is configured with a loosely-typed object supplied by the host
//! (typically edited by hand). [`validate`] turns it into a fully-populated
//! [`WidgetConfig`] or rejects it before any render is attempted.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::EntityId;

/// Default number of departures shown per entity.
pub const DEFAULT_MAX_DEPARTURES: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Header text used when no title is configured.
pub const DEFAULT_TITLE: &str = "HVV Departures";

/// Errors that reject a configuration as a whole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The retired single-entity field was used
    #[error("the {field} property is deprecated, please use {replacement} instead")]
    DeprecatedField {
        field: &'static str,
        replacement: &'static str,
    },

    /// A required field is absent, of the wrong kind, or empty
    #[error("the {0} property is required")]
    MissingField(&'static str),

    /// A field is present but holds an unusable value
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

/// Raw configuration as received from the host.
///
/// Every field is kept untyped so that validation can report which field
/// is wrong instead of failing on the first serde mismatch.
#[derive(Debug, Deserialize)]
struct RawWidgetConfig {
    entity: Option<Value>,
    entities: Option<Value>,
    title: Option<Value>,
    show_title: Option<Value>,
    show_name: Option<Value>,
    show_time: Option<Value>,
    max: Option<Value>,
}

/// Validated, fully-defaulted widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetConfig {
    entities: Vec<EntityId>,
    title: Option<String>,
    show_title: bool,
    show_name: bool,
    show_time: bool,
    max: NonZeroUsize,
}

impl WidgetConfig {
    /// Configured entities, in display order. Never empty.
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Whether the card header is shown.
    pub fn show_title(&self) -> bool {
        self.show_title
    }

    /// Whether each entity's friendly name is shown.
    pub fn show_name(&self) -> bool {
        self.show_name
    }

    /// Whether rows show the clock time instead of a countdown.
    pub fn show_time(&self) -> bool {
        self.show_time
    }

    /// Maximum number of departures per entity.
    pub fn max(&self) -> usize {
        self.max.get()
    }

    /// Header text to render, or `None` when the header is hidden.
    pub fn header(&self) -> Option<&str> {
        if !self.show_title {
            return None;
        }
        Some(
            self.title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TITLE),
        )
    }
}

impl TryFrom<&Value> for WidgetConfig {
    type Error = ConfigError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

/// Validate a raw configuration object and apply defaults.
///
/// # Errors
///
/// - [`ConfigError::DeprecatedField`] if the singular `entity` field is set.
/// - [`ConfigError::MissingField`] if `entities` is absent, not a list, or empty.
/// - [`ConfigError::InvalidField`] for malformed optional fields.
///
/// # Examples
///
/// ```
/// use departure_card::config::{validate, ConfigError};
/// use serde_json::json;
///
/// let config = validate(&json!({ "entities": ["sensor.s1"] })).unwrap();
/// assert_eq!(config.max(), 5);
/// assert!(!config.show_time());
///
/// assert!(matches!(
///     validate(&json!({ "entity": "sensor.s1" })),
///     Err(ConfigError::DeprecatedField { .. })
/// ));
/// ```
pub fn validate(raw: &Value) -> Result<WidgetConfig, ConfigError> {
    if !raw.is_object() {
        return Err(ConfigError::InvalidField {
            field: "config",
            reason: "must be an object",
        });
    }

    let raw = RawWidgetConfig::deserialize(raw).map_err(|_| ConfigError::InvalidField {
        field: "config",
        reason: "must be an object",
    })?;

    if raw.entity.as_ref().is_some_and(|e| !e.is_null()) {
        return Err(ConfigError::DeprecatedField {
            field: "entity",
            replacement: "entities",
        });
    }

    Ok(WidgetConfig {
        entities: parse_entities(raw.entities.as_ref())?,
        title: parse_title(raw.title.as_ref())?,
        show_title: parse_flag("show_title", raw.show_title.as_ref(), true)?,
        show_name: parse_flag("show_name", raw.show_name.as_ref(), true)?,
        show_time: parse_flag("show_time", raw.show_time.as_ref(), false)?,
        max: parse_max(raw.max.as_ref())?,
    })
}

fn parse_entities(value: Option<&Value>) -> Result<Vec<EntityId>, ConfigError> {
    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ConfigError::MissingField("entities")),
    };

    items
        .iter()
        .map(|item| match item.as_str() {
            Some(id) if !id.is_empty() => Ok(EntityId::new(id)),
            _ => Err(ConfigError::InvalidField {
                field: "entities",
                reason: "every entry must be a non-empty string",
            }),
        })
        .collect()
}

fn parse_title(value: Option<&Value>) -> Result<Option<String>, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(title)) => Ok(Some(title.clone())),
        Some(_) => Err(ConfigError::InvalidField {
            field: "title",
            reason: "must be a string",
        }),
    }
}

fn parse_flag(
    field: &'static str,
    value: Option<&Value>,
    default: bool,
) -> Result<bool, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ConfigError::InvalidField {
            field,
            reason: "must be true or false",
        }),
    }
}

/// `0` and `null` fall back to the default, like an unset value.
fn parse_max(value: Option<&Value>) -> Result<NonZeroUsize, ConfigError> {
    let invalid = ConfigError::InvalidField {
        field: "max",
        reason: "must be a positive integer",
    };

    match value {
        None | Some(Value::Null) => Ok(DEFAULT_MAX_DEPARTURES),
        Some(Value::Number(n)) => {
            let n = n.as_u64().ok_or(invalid.clone())?;
            let n = usize::try_from(n).map_err(|_| invalid)?;
            Ok(NonZeroUsize::new(n).unwrap_or(DEFAULT_MAX_DEPARTURES))
        }
        Some(_) => Err(invalid),
    }
}
