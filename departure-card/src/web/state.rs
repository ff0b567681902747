//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::card::{DepartureCard, ViewRenderer};

/// Shared application state.
///
/// Holds the single hosted card instance. Rendering to HTML or JSON happens
/// per request, so the card itself only produces views.
#[derive(Clone)]
pub struct AppState {
    /// The hosted card
    pub card: Arc<Mutex<DepartureCard<ViewRenderer>>>,
}

impl AppState {
    /// Create a new app state with an unconfigured card.
    pub fn new() -> Self {
        Self {
            card: Arc::new(Mutex::new(DepartureCard::new(ViewRenderer))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
