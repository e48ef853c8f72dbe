// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use std::fmt;

use fivedraw_cards::{Card, CardsError, Deck};

/// A five cards hand.
///
/// The hand keeps its cards in dealt order, classification predicates are
/// computed on demand and never reorder the hand.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Deals a hand from the top of a deck.
    ///
    /// Fails with [CardsError::EmptyDeck] if the deck has fewer than five
    /// cards left.
    pub fn deal(deck: &mut Deck) -> Result<Hand, CardsError> {
        Ok(Hand {
            cards: [
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
            ],
        })
    }

    /// Creates a hand with the given cards.
    pub fn new(cards: [Card; 5]) -> Hand {
        Hand { cards }
    }

    /// The cards in this hand in dealt order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Counts the ordered pairs of cards with matching ranks.
    ///
    /// Both (i, j) and (j, i) are counted, so a group of k cards of equal
    /// rank adds k*(k-1) to the count: a pair adds 2, trips 6, quads 12,
    /// and disjoint groups add up. The pair family predicates test against
    /// these values.
    pub fn match_count(&self) -> u32 {
        let mut matches = 0;
        for (i, card) in self.cards.iter().enumerate() {
            for (j, other) in self.cards.iter().enumerate() {
                if i != j && card.same_rank(other) {
                    matches += 1;
                }
            }
        }

        matches
    }

    /// Checks if the hand has exactly one pair.
    pub fn is_pair(&self) -> bool {
        self.match_count() == 2
    }

    /// Checks if the hand has two pairs of different ranks.
    pub fn is_two_pair(&self) -> bool {
        self.match_count() == 4
    }

    /// Checks if the hand has three cards of the same rank.
    pub fn is_trips(&self) -> bool {
        self.match_count() == 6
    }

    /// Checks if the hand has three cards of one rank and a pair of another.
    pub fn is_full_house(&self) -> bool {
        self.match_count() == 8
    }

    /// Checks if the hand has four cards of the same rank.
    pub fn is_quads(&self) -> bool {
        self.match_count() == 12
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|card| card.suit() == suit)
    }

    /// Checks if the hand has five cards of consecutive ranks.
    ///
    /// With no matching ranks the five cards are a straight when the
    /// positions of the lowest and highest rank are four apart. Ranks run
    /// from deuce to ace with no wraparound, the ace only plays high so
    /// 2-3-4-5-A is not a straight.
    pub fn is_straight(&self) -> bool {
        if self.match_count() != 0 {
            return false;
        }

        let mut ranks = self.cards.map(|card| card.rank());
        ranks.sort_unstable();
        ranks[4].index() - ranks[0].index() == 4
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }

        Ok(())
    }
}
