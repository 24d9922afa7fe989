//! Router for the about API

use anyhow::anyhow;
use axum::{Json, Router, extract::State, routing::get};

use super::public;
use crate::api::SharedState;
use crate::api::public::ApiError;

async fn about(State(state): State<SharedState>) -> Result<Json<public::AboutResponse>, ApiError> {
    let api_url = state
        .read()
        .map_err(|_| anyhow!("Unable to read shared state"))?
        .config
        .api_url
        .to_string();

    Ok(Json(public::AboutResponse {
        title: public::TITLE.to_string(),
        api_url,
    }))
}

/// Create the about router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(about))
}
