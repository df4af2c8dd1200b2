// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory registry of per-user deck sessions.

use crate::models::DeckSession;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Deck sessions keyed by user ID.
pub type Sessions = Arc<DashMap<String, DeckSession>>;

/// Per-user mutex serialising swipes.
pub type SwipeLocks = Arc<DashMap<String, Arc<Mutex<()>>>>;

/// Holds each user's deck position and display preferences.
///
/// Sessions are process-local and start at the first card. Clones share
/// state. Entries are never evicted: both maps hold one small entry per
/// user seen since startup.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Sessions,
    swipe_locks: SwipeLocks,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session for a user (a fresh one if none exists yet).
    pub fn get(&self, user_id: &str) -> DeckSession {
        self.sessions
            .get(user_id)
            .map(|s| *s)
            .unwrap_or_default()
    }

    /// Advance the user's deck and return the updated session.
    pub fn advance(&self, user_id: &str, deck_len: usize) -> DeckSession {
        let mut session = self.sessions.entry(user_id.to_string()).or_default();
        session.advance(deck_len);
        *session
    }

    pub fn set_dark_mode(&self, user_id: &str, dark_mode: bool) -> DeckSession {
        let mut session = self.sessions.entry(user_id.to_string()).or_default();
        session.dark_mode = dark_mode;
        *session
    }

    /// Lock that must be held while a user's swipe is being applied.
    ///
    /// Keeps the read-then-write reconcile sequence from interleaving with
    /// a second swipe from the same user in this process.
    pub fn swipe_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.swipe_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
