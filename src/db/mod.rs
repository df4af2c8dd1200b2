// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decision store: two classification sets per user.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::models::{Classification, DecisionDocument, DecisionEntry};
use async_trait::async_trait;

/// Collection names as constants.
///
/// Decisions live in sub-collections: `Users/{uid}/likedSports/{doc}` and
/// `Users/{uid}/UnlikedSports/{doc}`. The casing matches what the mobile
/// client already wrote.
pub mod collections {
    pub const USERS: &str = "Users";
    pub const LIKED_SPORTS: &str = "likedSports";
    pub const UNLIKED_SPORTS: &str = "UnlikedSports";
}

/// Errors from the decision store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store not connected (offline mode)")]
    Offline,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query failed on {collection}: {message}")]
    Query {
        collection: &'static str,
        message: String,
    },

    #[error("Write failed on {collection}: {message}")]
    Write {
        collection: &'static str,
        message: String,
    },

    #[error("Malformed document {doc_id} in {collection}: {message}")]
    Malformed {
        collection: &'static str,
        doc_id: String,
        message: String,
    },
}

/// Per-user liked/unliked record collections.
///
/// The store only moves documents around; keeping the two sets exclusive is
/// the reconciler's job.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// All entries in `set` whose `idSport` equals `id_sport`.
    async fn find_entries(
        &self,
        user_id: &str,
        set: Classification,
        id_sport: &str,
    ) -> Result<Vec<DecisionEntry>, StoreError>;

    /// Add a document under a store-generated ID, returning that ID.
    async fn insert_entry(
        &self,
        user_id: &str,
        set: Classification,
        document: &DecisionDocument,
    ) -> Result<String, StoreError>;

    /// Delete one document by ID. Deleting a missing document is not an error.
    async fn delete_entry(
        &self,
        user_id: &str,
        set: Classification,
        doc_id: &str,
    ) -> Result<(), StoreError>;

    /// Every entry in `set`, in store retrieval order.
    async fn list_entries(
        &self,
        user_id: &str,
        set: Classification,
    ) -> Result<Vec<DecisionEntry>, StoreError>;
}
