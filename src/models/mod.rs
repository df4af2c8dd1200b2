// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod decision;
pub mod history;
pub mod session;
pub mod sport;

pub use decision::{Classification, DecisionDocument, DecisionEntry, Direction};
pub use history::{HistoryItem, HistoryOrder, HistoryTag};
pub use session::DeckSession;
pub use sport::Sport;
