// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand notation parser.
//!
//! A hand is written as a sequence of two characters tokens, the card value
//! followed by the card suit, optionally separated by whitespace:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit, parse_cards};
//! let cards = parse_cards("A\u{2660} KH9C").unwrap();
//! assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
//! assert_eq!(cards[2], Card::new(Rank::Nine, Suit::Clubs));
//! ```
//!
//! Values are `2-9`, `T`, `J`, `Q`, `K`, `A` and suits are the letters `C`,
//! `D`, `H`, `S` or the filled and outlined suit glyphs.
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Malformed hand notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A card value character is not a known rank.
    #[error("Unrecognized card value character '{value}' at position {position}")]
    InvalidRank {
        /// The offending character.
        value: char,
        /// Character position in the input.
        position: usize,
    },
    /// A card suit character is not a known suit.
    #[error("Unrecognized card suit character '{suit}' at position {position}")]
    InvalidSuit {
        /// The offending character.
        suit: char,
        /// Character position in the input.
        position: usize,
    },
    /// The input ends with a card value without a suit.
    #[error("Card value '{value}' at position {position} has no suit")]
    MissingSuit {
        /// The dangling value character.
        value: char,
        /// Character position in the input.
        position: usize,
    },
    /// A single card was expected.
    #[error("Expected a single card, found {found}")]
    NotOneCard {
        /// The number of cards in the input.
        found: usize,
    },
}

/// Parses a sequence of cards.
///
/// No duplicate cards check is done, the same card may appear more than once
/// in the output.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseError> {
    let mut cards = Vec::with_capacity(text.len() / 2);
    let mut pending: Option<(Rank, char, usize)> = None;

    for (position, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }

        match pending.take() {
            None => {
                let rank = Rank::from_char(c).ok_or(ParseError::InvalidRank { value: c, position })?;
                pending = Some((rank, c, position));
            }
            Some((rank, _, _)) => {
                let suit = Suit::from_char(c).ok_or(ParseError::InvalidSuit { suit: c, position })?;
                cards.push(Card::new(rank, suit));
            }
        }
    }

    match pending {
        Some((_, value, position)) => Err(ParseError::MissingSuit { value, position }),
        None => Ok(cards),
    }
}
