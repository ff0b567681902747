//! Askama templates for the card markup.

use askama::Template;

use crate::card::CardRenderer;
use crate::plan::{CardView, EntityProjection, RenderRow};

/// The whole card.
#[derive(Template)]
#[template(path = "card.html")]
pub struct CardTemplate {
    pub header: Option<String>,
    pub entities: Vec<EntityView>,
}

impl CardTemplate {
    /// Create from a card view.
    pub fn from_view(view: &CardView) -> Self {
        Self {
            header: view.header.clone(),
            entities: view
                .entities
                .iter()
                .map(|e| EntityView::from_projection(e, view.show_name))
                .collect(),
        }
    }
}

/// Entity view model for templates.
#[derive(Debug, Clone)]
pub struct EntityView {
    pub entity_id: String,
    pub found: bool,
    /// Name to show; already `None` when names are hidden
    pub name: Option<String>,
    pub rows: Vec<RenderRow>,
}

impl EntityView {
    /// Create from a projection.
    pub fn from_projection(projection: &EntityProjection, show_name: bool) -> Self {
        match projection {
            EntityProjection::Found {
                entity_id,
                friendly_name,
                rows,
            } => Self {
                entity_id: entity_id.to_string(),
                found: true,
                name: friendly_name.clone().filter(|_| show_name),
                rows: rows.clone(),
            },
            EntityProjection::NotFound { entity_id } => Self {
                entity_id: entity_id.to_string(),
                found: false,
                name: None,
                rows: Vec::new(),
            },
        }
    }
}

/// Renders a card view to HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl CardRenderer for HtmlRenderer {
    type Output = Result<String, askama::Error>;

    fn render(&self, view: &CardView) -> Self::Output {
        CardTemplate::from_view(view).render()
    }
}
