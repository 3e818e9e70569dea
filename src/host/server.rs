// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use reqwest::Url;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};
use tracing::debug;

use crate::editor::{EditorError, EditorSession};
use crate::loader::LoadStatus;
use crate::model::{Report, ReportView};
use crate::store::ReportStore;

use super::types::*;

/// Shared state behind every route: the store, the loader's status feed, and at most one
/// editor session.
#[derive(Debug, Clone)]
pub struct HostState {
    store: ReportStore,
    load_status: watch::Receiver<LoadStatus>,
    location: Url,
    editor: Arc<Mutex<Option<EditorSession>>>,
}

impl HostState {
    /// `location` is the page address share links are built on.
    pub fn new(
        store: ReportStore,
        load_status: watch::Receiver<LoadStatus>,
        location: Url,
    ) -> Self {
        Self { store, load_status, location, editor: Arc::new(Mutex::new(None)) }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no editor session is open")]
    NoSession,
    #[error(transparent)]
    Editor(EditorError),
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.to_string() };
        (StatusCode::CONFLICT, Json(body)).into_response()
    }
}

pub fn router(state: HostState) -> Router {
    Router::new()
        .route("/api/report", get(report_read))
        .route("/api/report/schema", get(report_schema))
        .route("/api/editor", get(editor_open).delete(editor_close))
        .route("/api/editor/text", put(editor_edit))
        .route("/api/editor/validate", post(editor_validate))
        .route("/api/editor/commit", post(editor_commit))
        .route("/api/editor/reset", post(editor_reset))
        .route("/api/editor/share-link", post(editor_share_link))
        .with_state(state)
}

/// Serves the host on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: HostState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await
}

async fn report_read(State(state): State<HostState>) -> Json<ReportResponse> {
    let status = *state.load_status.borrow();
    let (rev, document) = state.store.snapshot();
    Json(ReportResponse::new(status, rev, &document))
}

async fn report_schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        document: schemars::schema_for!(Report),
        view: schemars::schema_for!(ReportView),
    })
}

/// Returns the open session, starting a fresh one when none is open or the last one committed.
async fn editor_open(State(state): State<HostState>) -> Json<EditorResponse> {
    let mut editor = state.editor.lock().await;
    let session = match editor.take() {
        Some(session) if !session.is_closed() => session,
        _ => {
            debug!(rev = state.store.rev(), "opening editor session");
            EditorSession::open(state.store.clone())
        }
    };
    let response = EditorResponse::from_session(&session);
    *editor = Some(session);
    Json(response)
}

async fn editor_close(State(state): State<HostState>) -> StatusCode {
    state.editor.lock().await.take();
    StatusCode::NO_CONTENT
}

async fn editor_edit(
    State(state): State<HostState>,
    Json(params): Json<EditTextParams>,
) -> Result<Json<EditorResponse>, HostError> {
    let mut editor = state.editor.lock().await;
    let session = open_session(&mut editor)?;
    session.edit(params.text).map_err(HostError::Editor)?;
    Ok(Json(EditorResponse::from_session(session)))
}

async fn editor_validate(
    State(state): State<HostState>,
) -> Result<Json<EditorResponse>, HostError> {
    let mut editor = state.editor.lock().await;
    let session = open_session(&mut editor)?;
    shown_inline(session.validate())?;
    Ok(Json(EditorResponse::from_session(session)))
}

async fn editor_commit(
    State(state): State<HostState>,
) -> Result<Json<EditorResponse>, HostError> {
    let mut editor = state.editor.lock().await;
    let session = open_session(&mut editor)?;
    session.commit().map_err(HostError::Editor)?;
    Ok(Json(EditorResponse::from_session(session)))
}

async fn editor_reset(
    State(state): State<HostState>,
) -> Result<Json<EditorResponse>, HostError> {
    let mut editor = state.editor.lock().await;
    let session = open_session(&mut editor)?;
    session.reset().map_err(HostError::Editor)?;
    Ok(Json(EditorResponse::from_session(session)))
}

async fn editor_share_link(
    State(state): State<HostState>,
) -> Result<Json<EditorResponse>, HostError> {
    let mut editor = state.editor.lock().await;
    let session = open_session(&mut editor)?;
    shown_inline(session.generate_share_link(&state.location))?;
    Ok(Json(EditorResponse::from_session(session)))
}

fn open_session(slot: &mut Option<EditorSession>) -> Result<&mut EditorSession, HostError> {
    slot.as_mut().filter(|session| !session.is_closed()).ok_or(HostError::NoSession)
}

/// Text errors are part of the session snapshot; only session misuse becomes an HTTP error.
fn shown_inline<T>(result: Result<T, EditorError>) -> Result<(), HostError> {
    match result {
        Ok(_) | Err(EditorError::Text(_)) => Ok(()),
        Err(err) => Err(HostError::Editor(err)),
    }
}
