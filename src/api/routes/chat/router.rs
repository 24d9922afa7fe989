//! Router for the chat API

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use super::public;
use crate::api::SharedState;
use crate::api::public::ApiError;
use crate::chat::Session;

fn find_session(state: &SharedState, id: &str) -> Result<Option<Arc<Session>>, ApiError> {
    let shared_state = state
        .read()
        .map_err(|_| anyhow!("Unable to read shared state"))?;
    Ok(shared_state.sessions.get(id))
}

fn session_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("Chat session {} not found", id),
    )
        .into_response()
}

/// Start a new chat session
async fn create_session(
    State(state): State<SharedState>,
) -> Result<Json<public::SessionCreatedResponse>, ApiError> {
    let session_id = state
        .write()
        .map_err(|_| anyhow!("Unable to write shared state"))?
        .sessions
        .create();
    tracing::info!("Started chat session {}", session_id);

    Ok(Json(public::SessionCreatedResponse { session_id }))
}

/// Get the transcript of a chat session
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(session) = find_session(&state, &id)? else {
        return Ok(session_not_found(&id));
    };

    let turns = session.turns().await;
    Ok(Json(public::ChatTranscriptResponse { turns }).into_response())
}

/// Ask a question in a chat session. Failures talking to the answer API
/// still produce a turn, so this only errors for bad input.
async fn chat_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Response, ApiError> {
    if payload.message.trim().is_empty() {
        return Ok((StatusCode::BAD_REQUEST, "Message must not be empty").into_response());
    }

    let (session, client) = {
        let shared_state = state
            .read()
            .map_err(|_| anyhow!("Unable to read shared state"))?;
        (shared_state.sessions.get(&id), shared_state.client.clone())
    };
    let Some(session) = session else {
        return Ok(session_not_found(&id));
    };

    let turn = session.submit(&client, &payload.message).await;

    Ok(Json(public::ChatResponse { turn }).into_response())
}

/// Clear the transcript of a chat session
async fn reset_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(session) = find_session(&state, &id)? else {
        return Ok(session_not_found(&id));
    };

    session.reset().await;
    tracing::debug!("Reset chat session {}", id);

    Ok(Json(public::ChatTranscriptResponse { turns: vec![] }).into_response())
}

/// End a chat session, dropping its transcript
async fn end_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let ended = state
        .write()
        .map_err(|_| anyhow!("Unable to write shared state"))?
        .sessions
        .end(&id);

    if !ended {
        return Ok(session_not_found(&id));
    }
    tracing::info!("Ended chat session {}", id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route(
            "/{id}",
            post(chat_handler).get(chat_session).delete(end_session),
        )
        .route("/{id}/reset", post(reset_session))
}
