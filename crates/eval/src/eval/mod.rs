// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator takes a pool of cards, usually two hole cards and five board
//! cards, and goes through three stages:
//!
//! - [CardCounts] counts how many cards of each rank and suit are in the pool;
//! - [Classification] finds the hand category and the ranks or suit that
//!   define it;
//! - the top cards selection picks the five cards that make the hand and the
//!   representative card used to break ties.
//!
//! The result is a [HandOutcome] that can be compared with other outcomes
//! evaluated on the same board.

mod classify;
mod counts;
mod outcome;
mod select;

pub use classify::{Category, Classification, HAND_SIZE, Run};
pub use counts::CardCounts;
pub use outcome::{HandOutcome, HandStrength};
