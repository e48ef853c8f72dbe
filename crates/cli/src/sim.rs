// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight odds estimation.
use anyhow::Result;
use log::debug;
use rand::Rng;

use fivedraw_eval::{Deck, Hand};

/// Simulation settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of straights to observe before stopping.
    pub straights: u64,
    /// Print each straight hand as it is dealt.
    pub show_hands: bool,
}

/// Counts collected by a simulation run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Number of hands dealt.
    pub trials: u64,
    /// Number of straights observed.
    pub straights: u64,
}

impl Report {
    /// The observed straights percentage over all dealt hands.
    pub fn probability(&self) -> f64 {
        100.0 * self.straights as f64 / self.trials as f64
    }
}

/// Deals hands from fresh shuffled decks until enough straights show up.
///
/// Each trial builds a full deck, shuffles it, and deals a single five
/// cards hand, so trials are independent.
pub fn run<R: Rng>(rng: &mut R, config: &Config) -> Result<Report> {
    let mut trials = 0;
    let mut straights = 0;

    while straights < config.straights {
        let mut deck = Deck::new_and_shuffled(rng);
        let hand = Hand::deal(&mut deck)?;
        trials += 1;

        if hand.is_straight() {
            straights += 1;
            debug!("straight {straights}/{} after {trials} hands", config.straights);

            if config.show_hands {
                println!("{hand}");
            }
        }
    }

    Ok(Report { trials, straights })
}
