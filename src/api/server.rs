use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::Result;
use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::api::state::AppState;
use crate::core::AppConfig;

pub type SharedState = Arc<RwLock<AppState>>;

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

pub fn app(shared_state: SharedState) -> Router {
    let cors = CorsLayer::permissive();
    let web_ui_path = match shared_state.read() {
        Ok(state) => state.config.web_ui_path.clone(),
        Err(poisoned) => poisoned.into_inner().config.web_ui_path.clone(),
    };

    Router::new()
        // API routes
        .nest("/api", routes::router())
        // Static server of the chat page
        .fallback_service(
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .service(ServeDir::new(web_ui_path)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Periodically drop sessions that have gone idle, e.g. because the
/// browser closed without ending its session.
pub fn spawn_session_sweeper(
    shared_state: SharedState,
    interval: Duration,
    ttl: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let evicted = match shared_state.write() {
                Ok(mut state) => state.sessions.evict_idle(ttl),
                Err(_) => {
                    tracing::error!("Unable to write shared state, stopping session sweeper");
                    break;
                }
            };
            if evicted > 0 {
                tracing::info!("Evicted {} idle chat sessions", evicted);
            }
        }
    })
}

// Run the server until the process is stopped
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    let api_url = config.api_url.clone();
    let (sweep_interval, session_ttl) = (config.session_sweep_interval, config.session_ttl);
    let app_state = AppState::new(config)?;
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::info!(
        "Server started. Listening on {}, answering from {}",
        listener.local_addr()?,
        api_url
    );

    spawn_session_sweeper(shared_state, sweep_interval, session_ttl);

    axum::serve(listener, app).await?;

    Ok(())
}
