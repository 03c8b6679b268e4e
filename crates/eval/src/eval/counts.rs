// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequencies of a cards pool.
use holdem_cards::{Card, Rank, Suit};

/// Per rank and per suit occupancy of a cards pool.
///
/// Counts are raw occurrences, a pool with duplicated cards counts each copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCounts {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
    // Bit r is set if a card of rank index r is in the suit.
    suited: [u16; Suit::COUNT],
}

impl CardCounts {
    /// Counts the ranks and suits of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        cards.iter().fold(Self::default(), |mut counts, card| {
            let (rank, suit) = (card.rank().index(), card.suit().index());
            counts.ranks[rank] = counts.ranks[rank].saturating_add(1);
            counts.suits[suit] = counts.suits[suit].saturating_add(1);
            counts.suited[suit] |= 1 << rank;
            counts
        })
    }

    /// Number of cards with the given rank.
    #[inline]
    pub fn rank(&self, rank: Rank) -> u8 {
        self.ranks[rank.index()]
    }

    /// Number of cards with the given suit.
    #[inline]
    pub fn suit(&self, suit: Suit) -> u8 {
        self.suits[suit.index()]
    }

    /// Checks if there is at least one card with the given rank.
    #[inline]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.rank(rank) > 0
    }

    /// Checks if the card with the given rank and suit is in the pool.
    #[inline]
    pub fn has_card(&self, rank: Rank, suit: Suit) -> bool {
        self.suited[suit.index()] & (1 << rank.index()) != 0
    }
}
