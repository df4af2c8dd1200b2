// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sport-Swipe: like/dislike a deck of sports and keep a per-user history
//!
//! This crate provides the backend API for the swipe deck: it serves the
//! sport catalog, reconciles each swipe into the user's liked/unliked sets,
//! and merges both sets into a history list.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::DecisionStore;
use services::{DecisionReconciler, SessionRegistry, SportCatalog};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DecisionStore>,
    pub catalog: SportCatalog,
    pub reconciler: DecisionReconciler,
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Wire the reconciler to `store` and start with no sessions.
    pub fn new(config: Config, store: Arc<dyn DecisionStore>, catalog: SportCatalog) -> Self {
        Self {
            config,
            reconciler: DecisionReconciler::new(store.clone()),
            store,
            catalog,
            sessions: SessionRegistry::new(),
        }
    }
}
