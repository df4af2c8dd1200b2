// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Merging the liked and unliked sets into one history list.

use crate::db::{DecisionStore, StoreError};
use crate::models::{Classification, DecisionDocument, HistoryItem, HistoryOrder, HistoryTag};
use std::cmp::Ordering;

/// Interleave liked and unliked entries by position.
///
/// Row `i` of the liked set comes first, then row `i` of the unliked set,
/// until both are exhausted. The order reflects store retrieval order, not
/// when the decisions were made.
pub fn build_history(liked: &[DecisionDocument], unliked: &[DecisionDocument]) -> Vec<HistoryItem> {
    let total = liked.len().max(unliked.len());
    let mut items = Vec::with_capacity(liked.len() + unliked.len());

    for i in 0..total {
        if let Some(doc) = liked.get(i) {
            items.push(HistoryItem::new(
                doc.sport(),
                HistoryTag::Favorite,
                doc.decided_at,
            ));
        }
        if let Some(doc) = unliked.get(i) {
            items.push(HistoryItem::new(
                doc.sport(),
                HistoryTag::Rejected,
                doc.decided_at,
            ));
        }
    }

    items
}

/// Merge both sets using the requested ordering.
pub fn build_history_ordered(
    liked: &[DecisionDocument],
    unliked: &[DecisionDocument],
    order: HistoryOrder,
) -> Vec<HistoryItem> {
    let mut items = build_history(liked, unliked);

    if order == HistoryOrder::Chronological {
        // Stable sort keeps undated entries in interleaved order.
        items.sort_by(|a, b| match (a.decided_at, b.decided_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    items
}

/// Read both sets for `user_id` and merge them.
pub async fn load_history(
    store: &dyn DecisionStore,
    user_id: &str,
    order: HistoryOrder,
) -> Result<Vec<HistoryItem>, StoreError> {
    let (liked, unliked) = tokio::try_join!(
        store.list_entries(user_id, Classification::Liked),
        store.list_entries(user_id, Classification::Unliked),
    )?;

    let liked: Vec<DecisionDocument> = liked.into_iter().map(|e| e.document).collect();
    let unliked: Vec<DecisionDocument> = unliked.into_iter().map(|e| e.document).collect();

    tracing::debug!(
        user_id,
        liked = liked.len(),
        unliked = unliked.len(),
        "Loaded decision history"
    );

    Ok(build_history_ordered(&liked, &unliked, order))
}
