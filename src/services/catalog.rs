// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport catalog client and the in-memory deck built from it.
//!
//! The catalog is fetched once at startup and treated as static for the
//! lifetime of the process.

use crate::models::Sport;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use validator::Validate;

/// Errors from fetching or parsing the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Catalog request failed: {0}")]
    Request(String),

    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// Raw catalog body. Records are decoded one by one so a single bad record
/// does not take the whole deck down.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    sports: Vec<serde_json::Value>,
}

/// HTTP client for the remote sport catalog.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Fetch and validate the full catalog.
    pub async fn fetch(&self) -> Result<SportCatalog, CatalogError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        SportCatalog::from_json(&body)
    }
}

/// The swipe deck: validated sport records in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SportCatalog {
    sports: Vec<Sport>,
    by_id: HashMap<String, usize>,
}

impl SportCatalog {
    /// An empty deck (used when the catalog is unavailable).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog body of the form `{"sports": [...]}`.
    ///
    /// Records that fail to decode or validate are skipped with a warning.
    /// A repeated `idSport` keeps its first occurrence.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let response: CatalogResponse =
            serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let sports = response
            .sports
            .into_iter()
            .enumerate()
            .filter_map(|(position, raw)| match serde_json::from_value::<Sport>(raw) {
                Ok(sport) => Some(sport),
                Err(e) => {
                    tracing::warn!(position, error = %e, "Skipping undecodable catalog record");
                    None
                }
            })
            .collect();

        Ok(Self::from_sports(sports))
    }

    /// Build a deck from already-decoded records, applying validation.
    pub fn from_sports(sports: Vec<Sport>) -> Self {
        let mut catalog = Self::default();

        for sport in sports {
            if let Err(e) = sport.validate() {
                tracing::warn!(id_sport = %sport.id_sport, error = %e, "Skipping invalid catalog record");
                continue;
            }
            if catalog.by_id.contains_key(&sport.id_sport) {
                tracing::warn!(id_sport = %sport.id_sport, "Skipping duplicate catalog record");
                continue;
            }
            catalog
                .by_id
                .insert(sport.id_sport.clone(), catalog.sports.len());
            catalog.sports.push(sport);
        }

        tracing::info!(count = catalog.sports.len(), "Loaded sport catalog");
        catalog
    }

    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    /// Look up a sport by `idSport`.
    pub fn get(&self, id_sport: &str) -> Option<&Sport> {
        self.by_id.get(id_sport).map(|&i| &self.sports[i])
    }

    pub fn len(&self) -> usize {
        self.sports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}
