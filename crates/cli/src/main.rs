// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::HashSet;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn};

use holdem_eval::{Card, HandOutcome, parse_cards};

mod report;
use report::{Comparison, Format};

#[derive(Debug, Parser)]
#[clap(name = "holdem", version, about = "Texas Hold'em hand evaluator")]
struct Cli {
    /// Output format.
    #[clap(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates the hole cards with the board cards.
    Eval {
        /// The board cards, for example "9H 6C TD JC 7H".
        #[clap(long, short, default_value = "")]
        board: String,
        /// The hole cards, for example "AS KH".
        hole: String,
    },
    /// Compares two hole cards on the same board.
    Compare {
        /// The board cards, for example "9H 6C TD JC 7H".
        #[clap(long, short, default_value = "")]
        board: String,
        /// The first player hole cards.
        first: String,
        /// The second player hole cards.
        second: String,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli)?);

    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Eval { board, hole } => {
            let board = parse_arg("board", board)?;
            let hole = parse_arg("hole", hole)?;
            warn_duplicates(&[&hole, &board]);

            report::outcome(&HandOutcome::eval(&hole, &board), cli.format)
        }
        Command::Compare {
            board,
            first,
            second,
        } => {
            let board = parse_arg("board", board)?;
            let first = parse_arg("first", first)?;
            let second = parse_arg("second", second)?;
            warn_duplicates(&[&first, &second, &board]);

            let cmp = Comparison::new(
                HandOutcome::eval(&first, &board),
                HandOutcome::eval(&second, &board),
            );
            report::comparison(&cmp, cli.format)
        }
    }
}

fn parse_arg(name: &str, text: &str) -> Result<Vec<Card>> {
    let cards = parse_cards(text).with_context(|| format!("Invalid {name} cards \"{text}\""))?;
    debug!("Parsed {name} cards {cards:?}");
    Ok(cards)
}

/// Logs a warning for each card that appears more than once.
fn warn_duplicates(groups: &[&[Card]]) -> usize {
    let mut seen = HashSet::default();
    let mut duplicates = 0;

    for card in groups.iter().flat_map(|cards| cards.iter()) {
        if !seen.insert(*card) {
            warn!("Duplicate card {card}");
            duplicates += 1;
        }
    }

    duplicates
}
