// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod history;
pub mod reconciler;
pub mod session;

pub use catalog::{CatalogClient, CatalogError, SportCatalog};
pub use history::{build_history, build_history_ordered, load_history};
pub use reconciler::{DecisionReconciler, PersistStatus, ReconcileError, ReconcileOutcome};
pub use session::SessionRegistry;
