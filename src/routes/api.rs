// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{DeckSession, Direction, HistoryItem, HistoryOrder, Sport};
use crate::services::{load_history, PersistStatus};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sports", get(get_sports))
        .route("/api/deck", get(get_deck))
        .route("/api/swipes", post(post_swipe))
        .route("/api/history", get(get_history))
        .route("/api/session", put(put_session))
}

// ─── Catalog ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct SportsResponse {
    pub sports: Vec<Sport>,
}

/// The full deck, in catalog order.
async fn get_sports(State(state): State<Arc<AppState>>) -> Json<SportsResponse> {
    Json(SportsResponse {
        sports: state.catalog.sports().to_vec(),
    })
}

// ─── Deck ────────────────────────────────────────────────────

/// Where the user is in the deck.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct DeckResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub current_index: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub deck_len: usize,
    pub current: Option<Sport>,
    pub dark_mode: bool,
}

impl DeckResponse {
    fn new(session: DeckSession, deck: &[Sport]) -> Self {
        Self {
            current_index: session.current_index,
            deck_len: deck.len(),
            current: session.current(deck).cloned(),
            dark_mode: session.dark_mode,
        }
    }
}

async fn get_deck(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<DeckResponse> {
    let session = state.sessions.get(&user.user_id);
    Json(DeckResponse::new(session, state.catalog.sports()))
}

// ─── Swipes ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct SwipeRequest {
    direction: Direction,
    #[serde(rename = "idSport")]
    id_sport: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct SwipeResponse {
    /// Whether the decision is in the store
    pub persisted: bool,
    pub persistence: PersistStatus,
    /// Deck state after advancing
    pub deck: DeckResponse,
}

/// Record a like/dislike on the current card and move to the next one.
///
/// The swiped sport must be the card the deck is showing; anything else is
/// a stale client and gets 409 with the session unchanged. The deck
/// advances even when the decision could not be saved; the response says
/// which happened.
async fn post_swipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SwipeRequest>,
) -> Result<Json<SwipeResponse>> {
    let id_sport = request.id_sport.trim();
    if id_sport.is_empty() {
        return Err(AppError::BadRequest("idSport must not be empty".to_string()));
    }

    let sport = state
        .catalog
        .get(id_sport)
        .ok_or_else(|| AppError::NotFound(format!("Sport {} not in catalog", id_sport)))?;

    let lock = state.sessions.swipe_lock(&user.user_id);
    let _guard = lock.lock().await;

    let current = state.sessions.get(&user.user_id);
    let showing = current.current(state.catalog.sports());
    if showing.map(|s| s.id_sport.as_str()) != Some(sport.id_sport.as_str()) {
        return Err(AppError::Conflict(format!(
            "Sport {} is not the current card (showing {})",
            id_sport,
            showing.map(|s| s.id_sport.as_str()).unwrap_or("none")
        )));
    }

    let persistence = state
        .reconciler
        .reconcile_best_effort(request.direction, sport, Some(&user.user_id))
        .await;

    let session = state
        .sessions
        .advance(&user.user_id, state.catalog.len());

    Ok(Json(SwipeResponse {
        persisted: persistence.is_persisted(),
        persistence,
        deck: DeckResponse::new(session, state.catalog.sports()),
    }))
}

// ─── History ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct HistoryQuery {
    #[serde(default)]
    order: HistoryOrder,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
}

/// Liked and disliked sports merged into one list.
async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>> {
    let items = load_history(state.store.as_ref(), &user.user_id, params.order).await?;
    Ok(Json(HistoryResponse { items }))
}

// ─── Session ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct SessionUpdate {
    dark_mode: bool,
}

async fn put_session(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(update): Json<SessionUpdate>,
) -> Json<DeckResponse> {
    let session = state
        .sessions
        .set_dark_mode(&user.user_id, update.dark_mode);
    Json(DeckResponse::new(session, state.catalog.sports()))
}
