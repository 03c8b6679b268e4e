// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text and JSON rendering of evaluation results.
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use holdem_eval::HandOutcome;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable text.
    Text,
    /// Pretty printed JSON.
    Json,
}

/// The hand that wins a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
    /// Both hands have the same strength.
    Tie,
}

impl From<Ordering> for Winner {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Winner::First,
            Ordering::Less => Winner::Second,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::First => write!(f, "first"),
            Winner::Second => write!(f, "second"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// Two outcomes evaluated on the same board.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    first: HandOutcome,
    second: HandOutcome,
    winner: Winner,
}

impl Comparison {
    /// Compares two outcomes.
    pub fn new(first: HandOutcome, second: HandOutcome) -> Self {
        let winner = first.compare(&second).into();
        Self {
            first,
            second,
            winner,
        }
    }

    /// The winning hand.
    pub fn winner(&self) -> Winner {
        self.winner
    }
}

/// Renders a single outcome.
pub fn outcome(outcome: &HandOutcome, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(outcome.to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

/// Renders a comparison.
pub fn comparison(cmp: &Comparison, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(format!(
            "First:  {}\nSecond: {}\nWinner: {}",
            cmp.first, cmp.second, cmp.winner
        )),
        Format::Json => Ok(serde_json::to_string_pretty(cmp)?),
    }
}
