//! Deck statistics and maintenance handlers.

use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::error::Result;
use crate::state::AppState;
use crate::views;
use drill_core::DeckStats;

/// GET /stats — progress over the whole deck.
pub async fn show(State(state): State<AppState>) -> Html<String> {
    let stats = DeckStats::collect(&state.deck());
    Html(views::stats_page(&stats))
}

/// POST /reload — re-read the card file, picking up external edits such as
/// a bulk import done while the server is running.
pub async fn reload(State(state): State<AppState>) -> Result<Redirect> {
    let fresh = state.store().load()?;
    tracing::info!("reloaded {} cards from disk", fresh.len());
    *state.deck() = fresh;
    Ok(Redirect::to("/stats"))
}
