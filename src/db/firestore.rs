// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Decisions are stored as sub-collections of the user document:
//! - `Users/{uid}/likedSports`
//! - `Users/{uid}/UnlikedSports`

use crate::db::{collections, DecisionStore, StoreError};
use crate::error::AppError;
use crate::models::{Classification, DecisionDocument, DecisionEntry};
use async_trait::async_trait;

/// Field used to look up a sport's entry within a set.
const ID_SPORT_FIELD: &str = "idSport";

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a disconnected client; every operation fails with
    /// [`StoreError::Offline`].
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb, StoreError> {
        self.client.as_ref().ok_or(StoreError::Offline)
    }

    /// Path of the user document that owns both decision sets.
    fn user_path(
        &self,
        user_id: &str,
    ) -> Result<(&firestore::FirestoreDb, firestore::ParentPathBuilder), StoreError> {
        let client = self.get_client()?;
        let path = client
            .parent_path(collections::USERS, user_id)
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok((client, path))
    }

    /// Run a select against one set and decode the documents, keeping IDs.
    async fn query_set(
        &self,
        user_id: &str,
        set: Classification,
        id_sport: Option<&str>,
    ) -> Result<Vec<DecisionEntry>, StoreError> {
        let (client, parent) = self.user_path(user_id)?;
        let collection = set.collection();

        let query = client.fluent().select().from(collection).parent(&parent);

        let docs = match id_sport {
            Some(id) => {
                let id = id.to_string();
                query
                    .filter(move |q| q.for_all([q.field(ID_SPORT_FIELD).eq(id.clone())]))
                    .query()
                    .await
            }
            None => query.query().await,
        }
        .map_err(|e| StoreError::Query {
            collection,
            message: e.to_string(),
        })?;

        docs.iter()
            .map(|doc| {
                let doc_id = doc.name.rsplit('/').next().unwrap_or_default().to_string();
                let document = firestore::FirestoreDb::deserialize_doc_to::<DecisionDocument>(doc)
                    .map_err(|e| StoreError::Malformed {
                        collection,
                        doc_id: doc_id.clone(),
                        message: e.to_string(),
                    })?;
                Ok(DecisionEntry { doc_id, document })
            })
            .collect()
    }
}

/// Document ID for a new decision: sport ID plus write time, so repeated
/// inserts never collide and IDs sort by time within a sport.
fn decision_doc_id(document: &DecisionDocument) -> String {
    let at = document.decided_at.unwrap_or_else(chrono::Utc::now);
    let safe_id = urlencoding::encode(&document.id_sport);
    format!("{}_{}", safe_id, at.timestamp_micros())
}

#[async_trait]
impl DecisionStore for FirestoreDb {
    async fn find_entries(
        &self,
        user_id: &str,
        set: Classification,
        id_sport: &str,
    ) -> Result<Vec<DecisionEntry>, StoreError> {
        self.query_set(user_id, set, Some(id_sport)).await
    }

    async fn insert_entry(
        &self,
        user_id: &str,
        set: Classification,
        document: &DecisionDocument,
    ) -> Result<String, StoreError> {
        let (client, parent) = self.user_path(user_id)?;
        let doc_id = decision_doc_id(document);

        let _: DecisionDocument = client
            .fluent()
            .insert()
            .into(set.collection())
            .document_id(&doc_id)
            .parent(&parent)
            .object(document)
            .execute()
            .await
            .map_err(|e| StoreError::Write {
                collection: set.collection(),
                message: e.to_string(),
            })?;

        tracing::debug!(user_id, set = %set, doc_id = %doc_id, "Inserted decision");
        Ok(doc_id)
    }

    async fn delete_entry(
        &self,
        user_id: &str,
        set: Classification,
        doc_id: &str,
    ) -> Result<(), StoreError> {
        let (client, parent) = self.user_path(user_id)?;

        client
            .fluent()
            .delete()
            .from(set.collection())
            .document_id(doc_id)
            .parent(&parent)
            .execute()
            .await
            .map_err(|e| StoreError::Write {
                collection: set.collection(),
                message: e.to_string(),
            })?;

        tracing::debug!(user_id, set = %set, doc_id, "Deleted decision");
        Ok(())
    }

    async fn list_entries(
        &self,
        user_id: &str,
        set: Classification,
    ) -> Result<Vec<DecisionEntry>, StoreError> {
        self.query_set(user_id, set, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sport;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_offline_client_reports_offline() {
        let db = FirestoreDb::new_mock();
        let err = db
            .list_entries("u1", Classification::Liked)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Offline));
    }

    #[test]
    fn test_decision_doc_id_escapes_sport_id() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let doc = DecisionDocument::new(&Sport::new("a/b", "Odd"), at);
        assert_eq!(decision_doc_id(&doc), "a%2Fb_1704067200000000");
    }
}
