// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt};
use thiserror::Error;

/// Errors for cards and deck operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardsError {
    /// A rank or suit symbol outside the cards symbol sets.
    #[error("invalid card symbol {0:?}")]
    InvalidValue(String),
    /// A deal from a deck with no cards left.
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
}

/// A playing card.
///
/// A card is an immutable rank and suit value. Equality and hashing use the
/// full (rank, suit) identity, hand classification compares ranks only
/// through [Card::same_rank].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Creates a card from its rank and suit display symbols.
    ///
    /// Fails with [CardsError::InvalidValue] if either symbol is outside
    /// its symbols set.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Card, CardsError> {
        Ok(Card {
            rank: Rank::from_symbol(rank)?,
            suit: Suit::from_symbol(suit)?,
        })
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Checks if this card has the same rank as another card.
    ///
    /// Two cards of different suits match when their ranks are equal, this
    /// is the comparison hand classification is built on.
    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// Ranks are ordered by their position in the deuce to ace sequence, the
/// ace is always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The position of this rank in the ascending ranks sequence.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a rank display symbol.
    ///
    /// Fails with [CardsError::InvalidValue] if the symbol is not one of
    /// `2`..`10`, `J`, `Q`, `K`, `A`.
    pub fn from_symbol(symbol: &str) -> Result<Rank, CardsError> {
        let rank = match symbol {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardsError::InvalidValue(symbol.to_string())),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits in deck building order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Parses a suit display symbol.
    ///
    /// Fails with [CardsError::InvalidValue] if the symbol is not one of
    /// `♤`, `♡`, `♢`, `♧`.
    pub fn from_symbol(symbol: &str) -> Result<Suit, CardsError> {
        let suit = match symbol {
            "♤" => Suit::Spades,
            "♡" => Suit::Hearts,
            "♢" => Suit::Diamonds,
            "♧" => Suit::Clubs,
            _ => return Err(CardsError::InvalidValue(symbol.to_string())),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => '♤',
            Suit::Hearts => '♡',
            Suit::Diamonds => '♢',
            Suit::Clubs => '♧',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck.
///
/// A new deck holds one card for each of the 52 suit and rank pairings,
/// suits in declared order with ranks ascending within each suit. Dealing
/// removes cards from the top of the current order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Deals the card at the top of the deck.
    ///
    /// Fails with [CardsError::EmptyDeck] when all cards have been dealt.
    pub fn deal(&mut self) -> Result<Card, CardsError> {
        self.cards.pop_front().ok_or(CardsError::EmptyDeck)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_from_symbols() {
        const RANKS: [&str; 13] = [
            "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
        ];
        const SUITS: [&str; 4] = ["♤", "♡", "♢", "♧"];

        let mut cards = HashSet::default();
        for suit in SUITS {
            for rank in RANKS {
                let card = Card::from_symbols(rank, suit).unwrap();
                assert_eq!(card.to_string(), format!("{rank}{suit}"));
                cards.insert(card);
            }
        }

        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_invalid_symbols() {
        assert_eq!(
            Card::from_symbols("1", "♡"),
            Err(CardsError::InvalidValue("1".to_string()))
        );
        assert_eq!(
            Card::from_symbols("11", "♧"),
            Err(CardsError::InvalidValue("11".to_string()))
        );
        // The filled suit symbols are not part of the suits set.
        assert_eq!(
            Card::from_symbols("Q", "♠"),
            Err(CardsError::InvalidValue("♠".to_string()))
        );
        assert_eq!(
            Card::from_symbols("Q", "S"),
            Err(CardsError::InvalidValue("S".to_string()))
        );
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(c.to_string(), "Q♡");

        let c = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(c.to_string(), "10♧");

        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(c.to_string(), "A♤");

        let c = Card::new(Rank::Deuce, Suit::Diamonds);
        assert_eq!(c.to_string(), "2♢");
    }

    #[test]
    fn card_same_rank() {
        let ks = Card::new(Rank::King, Suit::Spades);
        let kh = Card::new(Rank::King, Suit::Hearts);
        let qs = Card::new(Rank::Queen, Suit::Spades);

        assert!(ks.same_rank(&kh));
        assert!(kh.same_rank(&ks));
        assert!(!ks.same_rank(&qs));

        // Card equality keeps the suit identity.
        assert_ne!(ks, kh);
        assert_eq!(ks, Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn rank_ordering() {
        let mut ranks = Rank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 13);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));

        ranks.reverse();
        ranks.sort_unstable();
        assert_eq!(ranks, Rank::ranks().collect::<Vec<_>>());

        assert_eq!(Rank::Deuce.index(), 0);
        assert_eq!(Rank::Ten.index(), 8);
        assert_eq!(Rank::Ace.index(), 12);
    }

    #[test]
    fn deck_canonical_order() {
        let mut deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        // Suits in declared order, ranks ascending within each suit.
        assert_eq!(deck.deal().unwrap().to_string(), "2♤");
        for _ in 0..12 {
            assert_eq!(deck.deal().unwrap().suit(), Suit::Spades);
        }
        assert_eq!(deck.deal().unwrap().to_string(), "2♡");

        let last = Deck::default().into_iter().last().unwrap();
        assert_eq!(last.to_string(), "A♧");
    }

    #[test]
    fn deck_deals_all_cards() {
        let mut deck = Deck::default();
        let mut cards = HashSet::default();

        for _ in 0..Deck::SIZE {
            cards.insert(deck.deal().unwrap());
        }

        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(CardsError::EmptyDeck));
    }

    #[test]
    fn shuffle_keeps_the_cards_set() {
        let mut rng = StdRng::seed_from_u64(42);

        let deck = Deck::new_and_shuffled(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        let expected = Deck::default().into_iter().collect::<HashSet<_>>();
        assert_eq!(cards, expected);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let deal5 = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_and_shuffled(&mut rng);
            (0..5).map(|_| deck.deal().unwrap()).collect::<Vec<_>>()
        };

        assert_eq!(deal5(99), deal5(99));
        assert_ne!(deal5(99), deal5(100));
    }

    #[test]
    fn deck_to_string() {
        let deck = Deck::default();
        let text = deck.to_string();

        assert!(text.starts_with("2♤ 3♤ 4♤"));
        assert!(text.ends_with("Q♧ K♧ A♧"));
        assert_eq!(text.split_whitespace().count(), Deck::SIZE);
    }
}
