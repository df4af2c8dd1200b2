// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! History list items shown to the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Sport;

/// Display tag for a history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum HistoryTag {
    /// Liked
    Favorite,
    /// Disliked
    Rejected,
}

impl HistoryTag {
    /// Icon name the client renders for this tag.
    pub fn icon(self) -> &'static str {
        match self {
            HistoryTag::Favorite => "heart",
            HistoryTag::Rejected => "close",
        }
    }
}

/// Ordering applied when merging the two sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Newest decision first; undated entries trail in interleaved order.
    #[default]
    Chronological,
    /// Alternate liked/unliked by retrieval position.
    Interleaved,
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub sport: Sport,
    pub tag: HistoryTag,
    pub icon: String,
    #[serde(rename = "decidedAt")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub decided_at: Option<DateTime<Utc>>,
}

impl HistoryItem {
    pub fn new(sport: Sport, tag: HistoryTag, decided_at: Option<DateTime<Utc>>) -> Self {
        Self {
            sport,
            tag,
            icon: tag.icon().to_string(),
            decided_at,
        }
    }
}
