use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use landing_core::session::PreviewView;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    page::{PageContext, PageError, PageRenderer},
    presenter::Presenter,
    sessions::SessionStore,
};

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub presenter: Arc<Presenter>,
    pub sessions: SessionStore,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(presenter: Presenter, sessions: SessionStore, pages: PageRenderer) -> Self {
        Self {
            presenter: Arc::new(presenter),
            sessions,
            pages: Arc::new(pages),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub session: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub session: Option<Uuid>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub loading: bool,
    pub show_preview: bool,
    pub has_markup: bool,
}

pub struct WebError(PageError);

impl From<PageError> for WebError {
    fn from(value: PageError) -> Self {
        Self(value)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
    }
}

/// Build the application router with the provided state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/sessions/{id}/preview", get(preview))
        .route("/sessions/{id}/status", get(status))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Page load: resets the session named in `?session=`, or a fresh one.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, WebError> {
    let id = query.session.unwrap_or_else(Uuid::new_v4);
    let entry = state.sessions.reset(id);
    info!(session = %id, "session reset");
    let html = state.pages.render(&PageContext {
        session_id: id,
        session: &entry.state,
        description: "",
        notice: None,
        loading: entry.loading.is_visible(),
    })?;
    Ok(Html(html))
}

/// One trigger of the generate control.
pub async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, WebError> {
    let id = form.session.unwrap_or_else(Uuid::new_v4);
    let entry = state.sessions.get_or_open(id);

    let outcome = state
        .presenter
        .run_cycle(
            entry.state,
            &form.description,
            &entry.loading,
            CancellationToken::new(),
        )
        .await;
    info!(session = %id, state = ?outcome.state, "cycle finished");

    let html = state.pages.render(&PageContext {
        session_id: id,
        session: &outcome.session,
        description: &form.description,
        notice: Some(&outcome.notice),
        loading: entry.loading.is_visible(),
    })?;
    state.sessions.store(id, outcome.session);
    Ok(Html(html))
}

/// Raw generated markup of a session, for opening the page in its own tab.
pub async fn preview(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let Some(entry) = state.sessions.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match entry.state.preview() {
        PreviewView::Embedded(markup) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            markup.to_owned(),
        )
            .into_response(),
        PreviewView::Idle | PreviewView::NoPreview => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn status(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.sessions.get(&id) {
        Some(entry) => axum::Json(SessionStatus {
            loading: entry.loading.is_visible(),
            show_preview: entry.state.show_preview(),
            has_markup: !entry.state.generated_markup().is_empty(),
        })
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}
