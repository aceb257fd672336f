//! Web front-end: the same drill against the same card file, with one quiz
//! session per browser.

pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;
use drill_core::CardStore;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::quiz::show))
        .route("/answer", post(routes::quiz::answer))
        .route("/next", post(routes::quiz::next))
        .route("/stats", get(routes::stats::show))
        .route("/reload", post(routes::stats::reload))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_file = std::env::var("WORDDRILL_FILE").unwrap_or_else(|_| "words.json".to_string());
    tracing::info!("Loading cards from {data_file}");

    let store = CardStore::new(&data_file);
    let deck = match store.load() {
        Ok(deck) => deck,
        Err(err) => {
            tracing::error!("could not load {data_file}: {err}; starting with an empty deck");
            Vec::new()
        }
    };
    if deck.is_empty() {
        tracing::warn!("{data_file} is missing or empty; the quiz will show an empty-deck page");
    }

    let state = AppState::new(store, deck);
    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> error::WebError {
    error::WebError::NotFound
}
