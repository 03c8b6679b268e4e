// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category classifier.
//!
//! The classifier runs a fixed sequence of scans over the [CardCounts] of a
//! pool, each scan takes the classification produced by the previous one and
//! returns a new one that is never weaker:
//!
//! 1. pairs, sets and quads, scanning ranks from deuce to ace;
//! 2. straights, only while the hand is three of a kind or weaker;
//! 3. flushes, straight flushes and royal flushes, only while the hand is
//!    weaker than three of a kind or is a straight;
//! 4. truncation of the meaningful ranks to five.
use serde::Serialize;
use std::fmt;

use holdem_cards::{Rank, Suit};

use super::CardCounts;

/// The maximum number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl Category {
    /// The category strength from 1 (high card) to 10 (royal flush).
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// Five consecutive ranks, identified by the top rank of the run.
///
/// The wheel A-2-3-4-5 uses the ace as the lowest rank so its top is the five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    top: Rank,
}

impl Run {
    const ACE_HIGH: [Rank; HAND_SIZE] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
    const WHEEL: [Rank; HAND_SIZE] = [Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five];

    /// Finds the highest run in the pool.
    pub fn find(counts: &CardCounts) -> Option<Run> {
        Self::find_by(|rank| counts.has_rank(rank))
    }

    /// Finds the highest run with all its cards in the given suit.
    pub fn find_suited(counts: &CardCounts, suit: Suit) -> Option<Run> {
        Self::find_by(|rank| counts.has_card(rank, suit))
    }

    fn find_by(present: impl Fn(Rank) -> bool) -> Option<Run> {
        let all_present = |ranks: &[Rank]| ranks.iter().all(|&r| present(r));

        if all_present(&Self::ACE_HIGH) {
            return Some(Run { top: Rank::Ace });
        }

        // Runs topped by king down to six, the ace is handled by the wraparound cases.
        let mut length = 0;
        for rank in Rank::ranks().rev().skip(1) {
            if present(rank) {
                length += 1;
                if length == HAND_SIZE {
                    return Some(Run {
                        top: Rank::ALL[rank.index() + HAND_SIZE - 1],
                    });
                }
            } else {
                length = 0;
            }
        }

        all_present(&Self::WHEEL).then_some(Run { top: Rank::Five })
    }

    /// The top rank of the run, five for the wheel.
    pub fn top(&self) -> Rank {
        self.top
    }

    /// Checks if this is the ace-low straight.
    pub fn is_wheel(&self) -> bool {
        self.top == Rank::Five
    }

    /// Checks if this is the ace-high straight.
    pub fn is_ace_high(&self) -> bool {
        self.top == Rank::Ace
    }

    /// The run ranks from the lowest to the top, the wheel starts with the ace.
    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        if self.is_wheel() {
            Self::WHEEL
        } else {
            let low = self.top.index() + 1 - HAND_SIZE;
            std::array::from_fn(|i| Rank::ALL[low + i])
        }
    }

    /// The run ranks from the top down, the wheel ends with the ace.
    pub fn ranks_from_top(&self) -> [Rank; HAND_SIZE] {
        if self.is_wheel() {
            [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]
        } else {
            let mut ranks = self.ranks();
            ranks.reverse();
            ranks
        }
    }
}

/// The result of classifying a pool.
///
/// Each category carries what is needed to pick the cards that make the hand:
/// the meaningful ranks for pairs, sets and quads in the order they were found,
/// the run for straights, and the suit for flushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No pairs, straights, or flushes.
    HighCard,
    /// One pair rank.
    OnePair(Vec<Rank>),
    /// Two or more pair ranks.
    TwoPair(Vec<Rank>),
    /// One set rank.
    ThreeOfAKind(Vec<Rank>),
    /// A straight run.
    Straight(Run),
    /// The flush suit.
    Flush(Suit),
    /// Set and pair ranks.
    FullHouse(Vec<Rank>),
    /// Quads rank followed or preceded by any other group rank.
    FourOfAKind(Vec<Rank>),
    /// A run all in one suit.
    StraightFlush(Run, Suit),
    /// A suited run holding the ace with the broadway ranks in the pool.
    RoyalFlush(Run, Suit),
}

impl Classification {
    /// Classifies a pool given its counts.
    pub fn new(counts: &CardCounts) -> Self {
        Rank::ranks()
            .fold(Classification::HighCard, |class, rank| {
                class.with_group(rank, counts.rank(rank))
            })
            .with_straight(counts)
            .with_flush(counts)
            .truncated()
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        match self {
            Classification::HighCard => Category::HighCard,
            Classification::OnePair(_) => Category::OnePair,
            Classification::TwoPair(_) => Category::TwoPair,
            Classification::ThreeOfAKind(_) => Category::ThreeOfAKind,
            Classification::Straight(_) => Category::Straight,
            Classification::Flush(_) => Category::Flush,
            Classification::FullHouse(_) => Category::FullHouse,
            Classification::FourOfAKind(_) => Category::FourOfAKind,
            Classification::StraightFlush(..) => Category::StraightFlush,
            Classification::RoyalFlush(..) => Category::RoyalFlush,
        }
    }

    /// The ranks that define the category, empty for high card and flush.
    pub fn meaningful_ranks(&self) -> Vec<Rank> {
        match self {
            Classification::HighCard | Classification::Flush(_) => Vec::new(),
            Classification::OnePair(ranks)
            | Classification::TwoPair(ranks)
            | Classification::ThreeOfAKind(ranks)
            | Classification::FullHouse(ranks)
            | Classification::FourOfAKind(ranks) => ranks.clone(),
            Classification::Straight(run)
            | Classification::StraightFlush(run, _)
            | Classification::RoyalFlush(run, _) => run.ranks().to_vec(),
        }
    }

    /// The flush suit for flushes, straight flushes and royal flushes.
    pub fn flush_suit(&self) -> Option<Suit> {
        match self {
            Classification::Flush(suit)
            | Classification::StraightFlush(_, suit)
            | Classification::RoyalFlush(_, suit) => Some(*suit),
            _ => None,
        }
    }

    /// Adds a rank group of the given size.
    fn with_group(self, rank: Rank, count: u8) -> Self {
        use Classification::*;

        let push = |mut ranks: Vec<Rank>| {
            ranks.push(rank);
            ranks
        };

        match (self, count) {
            (HighCard, 2) => OnePair(vec![rank]),
            (HighCard, 3) => ThreeOfAKind(vec![rank]),
            (HighCard, 4) => FourOfAKind(vec![rank]),
            (OnePair(ranks) | TwoPair(ranks), 2) => TwoPair(push(ranks)),
            (ThreeOfAKind(ranks) | FullHouse(ranks), 2 | 3) => FullHouse(push(ranks)),
            (OnePair(ranks) | TwoPair(ranks), 3) => FullHouse(push(ranks)),
            (FourOfAKind(ranks), 2 | 3) => FourOfAKind(push(ranks)),
            (OnePair(ranks) | TwoPair(ranks) | ThreeOfAKind(ranks), 4) => FourOfAKind(push(ranks)),
            (FullHouse(ranks) | FourOfAKind(ranks), 4) => FourOfAKind(push(ranks)),
            (class, _) => class,
        }
    }

    /// Replaces a three of a kind or weaker hand with a straight.
    fn with_straight(self, counts: &CardCounts) -> Self {
        if self.category() > Category::ThreeOfAKind {
            return self;
        }

        match Run::find(counts) {
            Some(run) => Classification::Straight(run),
            None => self,
        }
    }

    /// Replaces a hand weaker than three of a kind, or a straight, with a flush,
    /// straight flush, or royal flush.
    fn with_flush(self, counts: &CardCounts) -> Self {
        let category = self.category();
        if category >= Category::ThreeOfAKind && category != Category::Straight {
            return self;
        }

        let Some(suit) = Suit::suits().find(|&s| counts.suit(s) >= HAND_SIZE as u8) else {
            return self;
        };

        // The straight may run past the suited cards, look for the highest
        // run inside the flush suit.
        let suited_run = match self {
            Classification::Straight(_) => Run::find_suited(counts, suit),
            _ => None,
        };

        match suited_run {
            Some(run) => {
                // Royal if the run holds the ace and the pool holds the broadway
                // ranks, in any suit.
                let broadway = Run::ACE_HIGH.iter().all(|&r| counts.has_rank(r));
                if broadway && run.ranks().contains(&Rank::Ace) {
                    Classification::RoyalFlush(run, suit)
                } else {
                    Classification::StraightFlush(run, suit)
                }
            }
            None => Classification::Flush(suit),
        }
    }

    /// Keeps at most five meaningful ranks in the order they were found.
    fn truncated(self) -> Self {
        let truncate = |mut ranks: Vec<Rank>| {
            ranks.truncate(HAND_SIZE);
            ranks
        };

        match self {
            Classification::OnePair(ranks) => Classification::OnePair(truncate(ranks)),
            Classification::TwoPair(ranks) => Classification::TwoPair(truncate(ranks)),
            Classification::ThreeOfAKind(ranks) => Classification::ThreeOfAKind(truncate(ranks)),
            Classification::FullHouse(ranks) => Classification::FullHouse(truncate(ranks)),
            Classification::FourOfAKind(ranks) => Classification::FourOfAKind(truncate(ranks)),
            class => class,
        }
    }
}
