// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
// Elapsed:         0.291s
//
// One Pair:        1098240
// Two Pair:        123552
// Trips:           54912
// Full House:      3744
// Quads:           624
// Flush:           5148
// Straight:        9216
// ```
//
// The straight count has no wheel straights, and flushes and straights
// overlap on the straight flushes.

use std::time::Instant;

use fivedraw_eval::{Deck, Hand};

fn main() {
    let cards = Deck::default().into_iter().collect::<Vec<_>>();
    let n = cards.len();

    let now = Instant::now();
    let mut total = 0u64;
    let mut counts = [0u64; 7];

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand =
                            Hand::new([cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]);

                        total += 1;
                        counts[0] += hand.is_pair() as u64;
                        counts[1] += hand.is_two_pair() as u64;
                        counts[2] += hand.is_trips() as u64;
                        counts[3] += hand.is_full_house() as u64;
                        counts[4] += hand.is_quads() as u64;
                        counts[5] += hand.is_flush() as u64;
                        counts[6] += hand.is_straight() as u64;
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s\n");

    println!("One Pair:        {}", counts[0]);
    println!("Two Pair:        {}", counts[1]);
    println!("Trips:           {}", counts[2]);
    println!("Full House:      {}", counts[3]);
    println!("Quads:           {}", counts[4]);
    println!("Flush:           {}", counts[5]);
    println!("Straight:        {}", counts[6]);
}
