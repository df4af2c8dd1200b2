// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Swipe decision reconciliation.
//!
//! A swipe files the sport into the direction's target set and removes it
//! from the opposite (stale) set:
//! 1. Look up the sport in both sets (concurrently, before any write)
//! 2. Delete every stale entry
//! 3. Insert into the target set unless an entry is already there
//!
//! Afterwards the sport has exactly one entry across both sets, and
//! repeating the same swipe changes nothing.

use crate::db::{DecisionStore, StoreError};
use crate::models::{Classification, DecisionDocument, DecisionEntry, Direction, Sport};
use futures_util::{stream, StreamExt};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_CONCURRENT_DELETES: usize = 8;

/// What a reconcile call did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No authenticated user; the store was not touched.
    Skipped,
    /// The decision state now matches the swipe.
    Applied {
        /// Entries removed (stale set, plus duplicates in the target set)
        removed: usize,
        /// Whether a new target entry was written
        inserted: bool,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Sport record has an empty idSport")]
    InvalidSport,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persistence result reported back to the client alongside the next card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PersistStatus {
    Stored,
    Unchanged,
    Skipped,
    Failed { reason: String },
}

impl PersistStatus {
    pub fn is_persisted(&self) -> bool {
        matches!(self, PersistStatus::Stored | PersistStatus::Unchanged)
    }
}

/// Keeps each user's liked/unliked sets consistent with their swipes.
#[derive(Clone)]
pub struct DecisionReconciler {
    store: Arc<dyn DecisionStore>,
}

impl DecisionReconciler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    /// Apply one swipe for `user_id` (or do nothing when `None`).
    pub async fn reconcile(
        &self,
        direction: Direction,
        sport: &Sport,
        user_id: Option<&str>,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        let Some(user_id) = user_id else {
            tracing::debug!(id_sport = %sport.id_sport, "No current user, skipping swipe");
            return Ok(ReconcileOutcome::Skipped);
        };

        let id_sport = sport.id_sport.trim();
        if id_sport.is_empty() {
            return Err(ReconcileError::InvalidSport);
        }

        let stale = direction.stale();
        let target = direction.target();

        // Both reads complete before the first write.
        let (stale_entries, target_entries) = tokio::try_join!(
            self.store.find_entries(user_id, stale, id_sport),
            self.store.find_entries(user_id, target, id_sport),
        )?;

        let mut removed = self.delete_all(user_id, stale, stale_entries).await?;

        let inserted = match target_entries.split_first() {
            None => {
                let document = DecisionDocument::new(sport, chrono::Utc::now());
                self.store.insert_entry(user_id, target, &document).await?;
                true
            }
            Some((_, duplicates)) => {
                removed += self
                    .delete_all(user_id, target, duplicates.to_vec())
                    .await?;
                false
            }
        };

        tracing::info!(
            user_id,
            id_sport,
            direction = ?direction,
            removed,
            inserted,
            "Swipe reconciled"
        );

        Ok(ReconcileOutcome::Applied { removed, inserted })
    }

    /// Apply a swipe, logging instead of propagating failures.
    ///
    /// The swipe itself always proceeds; the returned status tells the
    /// caller whether the decision was saved.
    pub async fn reconcile_best_effort(
        &self,
        direction: Direction,
        sport: &Sport,
        user_id: Option<&str>,
    ) -> PersistStatus {
        match self.reconcile(direction, sport, user_id).await {
            Ok(ReconcileOutcome::Skipped) => PersistStatus::Skipped,
            Ok(ReconcileOutcome::Applied {
                removed: 0,
                inserted: false,
            }) => PersistStatus::Unchanged,
            Ok(ReconcileOutcome::Applied { .. }) => PersistStatus::Stored,
            Err(e) => {
                tracing::error!(
                    user_id = user_id.unwrap_or_default(),
                    id_sport = %sport.id_sport,
                    direction = ?direction,
                    error = %e,
                    "Failed to persist swipe"
                );
                PersistStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn delete_all(
        &self,
        user_id: &str,
        set: Classification,
        entries: Vec<DecisionEntry>,
    ) -> Result<usize, StoreError> {
        let count = entries.len();
        if count > 1 {
            tracing::warn!(user_id, set = %set, count, "Removing duplicate decision entries");
        }

        stream::iter(entries)
            .map(|entry| async move { self.store.delete_entry(user_id, set, &entry.doc_id).await })
            .buffer_unordered(MAX_CONCURRENT_DELETES)
            .collect::<Vec<Result<(), StoreError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, StoreError>>()?;

        Ok(count)
    }
}
