use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for the server. axum logs rejections from built-in
/// extractors with the `axum::rejection` target, at `TRACE` level.
pub fn server_filter() -> String {
    format!(
        "{}=debug,tower_http=debug,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}

/// Default filter for the terminal chat, errors only so they don't
/// bury the conversation.
pub fn repl_filter() -> String {
    format!("{}=warn", env!("CARGO_CRATE_NAME"))
}

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init(default_filter: String) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
