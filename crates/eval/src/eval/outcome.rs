// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand outcome and comparison.
use log::trace;
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use holdem_cards::{Card, Rank};

use super::{CardCounts, Category, Classification, select::select};

/// The evaluated hand of a cards pool.
///
/// An outcome has the hand category, the best five cards in the pool, and a
/// representative card used to break ties between hands of the same category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandOutcome {
    category: Category,
    representative: Option<Card>,
    top_cards: Vec<Card>,
}

impl HandOutcome {
    /// Evaluates the hole cards together with the board cards.
    pub fn eval(hole: &[Card], board: &[Card]) -> Self {
        let pool = hole.iter().chain(board).copied().collect::<Vec<_>>();
        Self::eval_pool(&pool)
    }

    /// Evaluates a pool of cards.
    ///
    /// Any number of cards is accepted, the pool should not contain duplicates.
    pub fn eval_pool(pool: &[Card]) -> Self {
        let counts = CardCounts::new(pool);
        let class = Classification::new(&counts);
        let selection = select(&class, &counts, pool);

        let outcome = Self {
            category: class.category(),
            representative: selection.representative,
            top_cards: selection.top_cards,
        };

        trace!("Evaluated {pool:?} as {outcome}");
        outcome
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The card that breaks ties within a category, none for an empty pool.
    pub fn representative(&self) -> Option<Card> {
        self.representative
    }

    /// The best five cards, defining cards first then kickers.
    pub fn top_cards(&self) -> &[Card] {
        &self.top_cards
    }

    /// The key this outcome is ordered by.
    pub fn strength(&self) -> HandStrength {
        HandStrength {
            category: self.category,
            rank: self.representative.map(|c| c.rank()),
        }
    }

    /// Compares two outcomes by category and then by representative card.
    ///
    /// Kickers are not compared, two hands with the same category and
    /// representative rank are equal even if their other cards differ.
    pub fn compare(&self, other: &HandOutcome) -> Ordering {
        self.strength().cmp(&other.strength())
    }

    /// Compares two outcomes by category and then card by card over the top
    /// cards by rank.
    ///
    /// This is an alternative to [HandOutcome::compare] that also looks at the
    /// kickers, it is not used by the default ordering.
    pub fn cmp_top_cards(&self, other: &HandOutcome) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.top_cards
                .iter()
                .zip(&other.top_cards)
                .map(|(a, b)| a.cmp_rank(b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;

        if let Some(card) = self.representative {
            write!(f, " ({card})")?;
        }

        write!(f, " [")?;
        for (idx, card) in self.top_cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// The ordering key of a [HandOutcome]: the category first and then the
/// representative card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength {
    category: Category,
    rank: Option<Rank>,
}

impl HandStrength {
    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The representative card rank.
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }
}
