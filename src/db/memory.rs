// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local decision store for development and tests.

use crate::db::{DecisionStore, StoreError};
use crate::models::{Classification, DecisionDocument, DecisionEntry};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

type SetKey = (String, Classification);

/// In-memory implementation of [`DecisionStore`].
///
/// Each set keeps insertion order, which stands in for Firestore's
/// retrieval order. Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    sets: Arc<DashMap<SetKey, Vec<DecisionEntry>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a set directly, bypassing reconciliation. Returns the document ID.
    pub fn seed(&self, user_id: &str, set: Classification, document: DecisionDocument) -> String {
        let doc_id = self.generate_id();
        self.sets
            .entry((user_id.to_string(), set))
            .or_default()
            .push(DecisionEntry {
                doc_id: doc_id.clone(),
                document,
            });
        doc_id
    }

    /// Snapshot of one set's `idSport` values, in order.
    pub fn ids(&self, user_id: &str, set: Classification) -> Vec<String> {
        self.sets
            .get(&(user_id.to_string(), set))
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| e.document.id_sport.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of stored documents across all users.
    pub fn len(&self) -> usize {
        self.sets.iter().map(|set| set.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn generate_id(&self) -> String {
        format!("mem-{:08}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl DecisionStore for MemoryStore {
    async fn find_entries(
        &self,
        user_id: &str,
        set: Classification,
        id_sport: &str,
    ) -> Result<Vec<DecisionEntry>, StoreError> {
        Ok(self
            .sets
            .get(&(user_id.to_string(), set))
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.document.id_sport == id_sport)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_entry(
        &self,
        user_id: &str,
        set: Classification,
        document: &DecisionDocument,
    ) -> Result<String, StoreError> {
        Ok(self.seed(user_id, set, document.clone()))
    }

    async fn delete_entry(
        &self,
        user_id: &str,
        set: Classification,
        doc_id: &str,
    ) -> Result<(), StoreError> {
        if let Some(mut entries) = self.sets.get_mut(&(user_id.to_string(), set)) {
            entries.retain(|e| e.doc_id != doc_id);
        }
        Ok(())
    }

    async fn list_entries(
        &self,
        user_id: &str,
        set: Classification,
    ) -> Result<Vec<DecisionEntry>, StoreError> {
        Ok(self
            .sets
            .get(&(user_id.to_string(), set))
            .map(|entries| entries.value().clone())
            .unwrap_or_default())
    }
}
