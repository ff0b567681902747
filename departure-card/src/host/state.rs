//! Host state snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::EntityId;

/// A read-only snapshot of the host's entity state table.
///
/// Serialized as a plain map from entity id to state object, the same shape
/// the host exposes. State objects stay untyped until they are projected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostState {
    states: HashMap<EntityId, Value>,
}

impl HostState {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one entity's state, returning the previous one.
    pub fn insert(&mut self, id: EntityId, state: Value) -> Option<Value> {
        self.states.insert(id, state)
    }

    /// Look up an entity's state. A `null` state counts as absent.
    pub fn get(&self, id: &EntityId) -> Option<&Value> {
        self.states.get(id).filter(|v| !v.is_null())
    }

    /// Number of entities in the snapshot.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the snapshot holds no entities.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<(EntityId, Value)> for HostState {
    fn from_iter<I: IntoIterator<Item = (EntityId, Value)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
