// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.cmp_rank(&kd).is_gt());
//! ```
//!
//! a parser for the two characters hand notation:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit, parse_cards};
//! let cards = parse_cards("AS K\u{2665} 7C").unwrap();
//! assert_eq!(cards.len(), 3);
//! assert_eq!(cards[1], Card::new(Rank::King, Suit::Hearts));
//! ```
//!
//! and a [Deck] type for iterating hands, for example to iterate through all
//! 5 cards hands:
//!
//! ```no_run
//! # use holdem_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

pub mod parser;
pub use parser::{ParseError, parse_cards};
