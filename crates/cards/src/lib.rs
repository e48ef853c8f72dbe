// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use fivedraw_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use fivedraw_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! Cards can also be created from their display symbols, symbols outside
//! the rank and suit sets are rejected:
//!
//! ```
//! # use fivedraw_cards::Card;
//! let qh = Card::from_symbols("Q", "♡").unwrap();
//! assert_eq!(qh.to_string(), "Q♡");
//! assert!(Card::from_symbols("1", "♡").is_err());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardsError, Deck, Rank, Suit};
