//! API routes module

pub mod about;
pub mod chat;

use axum::Router;

use crate::api::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat session routes
        .nest("/chat", chat::router())
        // Static details about the assistant
        .nest("/about", about::router())
}
