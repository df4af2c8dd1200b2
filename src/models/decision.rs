// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Swipe decisions and their stored form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Sport;

/// Swipe direction. Left is a dislike, right is a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The set a swipe in this direction files the sport into.
    pub fn target(self) -> Classification {
        match self {
            Direction::Left => Classification::Unliked,
            Direction::Right => Classification::Liked,
        }
    }

    /// The set a swipe in this direction must remove the sport from.
    pub fn stale(self) -> Classification {
        self.target().opposite()
    }
}

/// Which of the two per-user sets a decision lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Liked,
    Unliked,
}

impl Classification {
    pub fn opposite(self) -> Self {
        match self {
            Classification::Liked => Classification::Unliked,
            Classification::Unliked => Classification::Liked,
        }
    }

    /// Firestore sub-collection name under `Users/{uid}`.
    pub fn collection(self) -> &'static str {
        match self {
            Classification::Liked => crate::db::collections::LIKED_SPORTS,
            Classification::Unliked => crate::db::collections::UNLIKED_SPORTS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Liked => "liked",
            Classification::Unliked => "unliked",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decision as persisted in one of the classification sets.
///
/// The sport fields are stored flat next to `decidedAt`, matching documents
/// written by the mobile client. `decidedAt` is absent on older documents,
/// and older documents may carry a numeric `idSport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDocument {
    #[serde(
        rename = "idSport",
        deserialize_with = "crate::models::sport::string_or_number"
    )]
    pub id_sport: String,
    #[serde(rename = "strSport")]
    pub name: String,
    #[serde(rename = "strFormat", default)]
    pub format: String,
    #[serde(rename = "strSportThumb", default)]
    pub thumb_url: String,
    #[serde(rename = "strSportIconGreen", default)]
    pub icon_url: String,
    #[serde(rename = "strSportDescription", default)]
    pub description: String,
    #[serde(rename = "decidedAt", default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl DecisionDocument {
    /// Stored form of a decision on `sport`. The ID is stored trimmed, the
    /// same form lookups use.
    pub fn new(sport: &Sport, decided_at: DateTime<Utc>) -> Self {
        Self {
            id_sport: sport.id_sport.trim().to_string(),
            name: sport.name.clone(),
            format: sport.format.clone(),
            thumb_url: sport.thumb_url.clone(),
            icon_url: sport.icon_url.clone(),
            description: sport.description.clone(),
            decided_at: Some(decided_at),
        }
    }

    pub fn sport(&self) -> Sport {
        Sport {
            id_sport: self.id_sport.clone(),
            name: self.name.clone(),
            format: self.format.clone(),
            thumb_url: self.thumb_url.clone(),
            icon_url: self.icon_url.clone(),
            description: self.description.clone(),
        }
    }
}

/// A stored decision together with its store-assigned document ID.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionEntry {
    pub doc_id: String,
    pub document: DecisionDocument,
}
