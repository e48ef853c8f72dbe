// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw straight odds simulator.
//!
//! Deals five cards hands from fresh shuffled decks until the requested
//! number of straights is observed and reports the straights percentage.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

pub mod sim;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of straights to observe before stopping.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    straights: u64,
    /// Seed for the shuffling rng for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
    /// Print each straight hand as it is dealt.
    #[clap(long)]
    show_hands: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = sim::Config {
        straights: cli.straights,
        show_hands: cli.show_hands,
    };

    let report = match cli.seed {
        Some(seed) => sim::run(&mut StdRng::seed_from_u64(seed), &config)?,
        None => sim::run(&mut rand::rng(), &config)?,
    };

    println!("probability of a straight is {}%", report.probability());

    Ok(())
}
