// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user deck position and display preferences.

use serde::Serialize;

use crate::models::Sport;

/// Explicit session state for one user's swipe deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeckSession {
    /// Index of the card currently shown
    pub current_index: usize,
    /// Dark-mode display preference
    pub dark_mode: bool,
}

impl DeckSession {
    /// Move to the next card, wrapping at the end of the deck.
    ///
    /// An empty deck leaves the index at 0.
    pub fn advance(&mut self, deck_len: usize) -> usize {
        self.current_index = match deck_len {
            0 => 0,
            len => (self.current_index % len + 1) % len,
        };
        self.current_index
    }

    /// The card at the current index, if the deck has any.
    pub fn current<'a>(&self, deck: &'a [Sport]) -> Option<&'a Sport> {
        if deck.is_empty() {
            return None;
        }
        deck.get(self.current_index % deck.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Sport> {
        (0..n)
            .map(|i| Sport::new(i.to_string(), format!("Sport {}", i)))
            .collect()
    }

    #[test]
    fn test_advance_wraps() {
        let mut session = DeckSession::default();
        assert_eq!(session.advance(3), 1);
        assert_eq!(session.advance(3), 2);
        assert_eq!(session.advance(3), 0);
    }

    #[test]
    fn test_advance_empty_deck_stays_at_zero() {
        let mut session = DeckSession::default();
        assert_eq!(session.advance(0), 0);
        assert_eq!(session.advance(0), 0);

        let mut session = DeckSession {
            current_index: 4,
            dark_mode: false,
        };
        assert_eq!(session.advance(0), 0);
    }

    #[test]
    fn test_advance_after_deck_shrinks() {
        let mut session = DeckSession {
            current_index: 7,
            dark_mode: false,
        };
        assert_eq!(session.advance(3), 2);
    }

    #[test]
    fn test_current_card() {
        let cards = deck(2);
        let mut session = DeckSession::default();
        assert_eq!(session.current(&cards).unwrap().id_sport, "0");
        session.advance(cards.len());
        assert_eq!(session.current(&cards).unwrap().id_sport, "1");
        assert!(session.current(&[]).is_none());
    }
}
