//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Local;
use serde_json::Value;
use tracing::warn;

use crate::card::CardRenderer;
use crate::config::{ConfigError, WidgetConfig, validate};
use crate::host::HostState;
use crate::plan::{CARD_SIZE, CardView, build_view};

use super::dto::*;
use super::state::AppState;
use super::templates::HtmlRenderer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/card/size", get(card_size))
        .route("/card/config", put(put_config))
        .route("/card/states", post(post_states))
        .route("/card/render", post(render_card))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Layout size of the card.
async fn card_size() -> Json<CardSizeResponse> {
    Json(CardSizeResponse { size: CARD_SIZE })
}

/// Install a new configuration on the hosted card.
async fn put_config(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<WidgetConfig>, AppError> {
    let mut card = state.card.lock().await;
    let config = card.set_config(&raw)?;
    Ok(Json(config.clone()))
}

/// Push a host snapshot to the hosted card.
///
/// Responds with the rendered card, or `204 No Content` when no configured
/// entity changed since the previous snapshot.
async fn post_states(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(snapshot): Json<HostState>,
) -> Result<Response, AppError> {
    let mut card = state.card.lock().await;

    if card.config().is_none() {
        return Err(AppError::BadRequest {
            message: "card is not configured".to_string(),
        });
    }

    match card.update(snapshot, &Local::now()) {
        Some(view) => render_response(&view, &headers),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Render a card from a configuration and snapshot in the request body.
async fn render_card(
    headers: HeaderMap,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let config = validate(&req.config)?;
    let view = build_view(&config, &req.states, &Local::now());
    render_response(&view, &headers)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Return HTML or JSON based on the Accept header.
fn render_response(view: &CardView, headers: &HeaderMap) -> Result<Response, AppError> {
    if accepts_html(headers) {
        let html = HtmlRenderer.render(view).map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(view).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
