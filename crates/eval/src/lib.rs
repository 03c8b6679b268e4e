// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem hand evaluator.
//!
//! Classifies a Texas Hold'em hand into one of the ten poker categories, picks
//! the five cards that make the hand, and compares hands played on the same
//! board.
//!
//! To use the evaluator parse or create the hole and board cards and use
//! [HandOutcome::eval] to get the hand outcome:
//!
//! ```
//! # use holdem_eval::*;
//! let board = parse_cards("9H 6C TD JC 7H").unwrap();
//! let a = HandOutcome::eval(&parse_cards("AS KH").unwrap(), &board);
//! let b = HandOutcome::eval(&parse_cards("2D 2C").unwrap(), &board);
//! assert_eq!(a.category(), Category::HighCard);
//! assert_eq!(b.category(), Category::OnePair);
//! assert!(b.compare(&a).is_gt());
//! ```
//!
//! Outcomes are compared by category and then by the rank of the
//! representative card, kickers are not taken into account.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{CardCounts, Category, Classification, HAND_SIZE, HandOutcome, HandStrength, Run};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, ParseError, Rank, Suit, parse_cards};
