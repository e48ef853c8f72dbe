// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw five cards hand classifier.
//!
//! Classifies a five cards [Hand] dealt from a [Deck] into the pair family
//! hand types, flush, and straight. The pair family predicates share a
//! single rank matches count, see [Hand::match_count].
//!
//! ```
//! # use fivedraw_eval::{Deck, Hand};
//! // The top of a new deck is 2♤ 3♤ 4♤ 5♤ 6♤.
//! let mut deck = Deck::default();
//! let hand = Hand::deal(&mut deck).unwrap();
//! assert!(hand.is_flush());
//! assert!(hand.is_straight());
//! assert_eq!(hand.match_count(), 0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use fivedraw_cards::{Card, CardsError, Deck, Rank, Suit};
