//! Side-bet EV for the very next hand: only the two player cards and the
//! dealer's up-card are sampled, each trial from the full current shoe.

use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::draw::Sampler;
use crate::error::EvResult;
use crate::round::Outcome;
use crate::shoe::ShoeCounts;
use crate::sidebets::{hot_three, perfect_pairs, twenty_one_plus_three};
use crate::simulator::{aggregate, split_rounds, worker_rng, Bet, EvReport};

fn side_bet_row(sampler: &mut Sampler<StdRng>) -> Option<Outcome> {
    let p1 = sampler.next()?;
    let p2 = sampler.next()?;
    let up = sampler.next()?;
    Some(Outcome {
        twenty_one_plus_three: twenty_one_plus_three(p1, p2, up),
        perfect_pairs: perfect_pairs(p1, p2),
        hot_three: hot_three(p1, p2, up),
        ..Outcome::default()
    })
}

/// Estimates the 21+3, Perfect Pairs and Hot 3 EVs for the next deal.
/// Trials that cannot draw three cards are left out of the means.
pub fn next_hand_side_bets(
    counts: &ShoeCounts,
    trials: usize,
    seed: Option<u64>,
) -> EvResult<EvReport> {
    let shares = split_rounds(trials, rayon::current_num_threads());
    let snapshot = *counts;

    let rows: Vec<Outcome> = shares
        .par_iter()
        .enumerate()
        .flat_map_iter(|(chunk, &n)| {
            let mut sampler = Sampler::new(snapshot, worker_rng(seed, chunk));
            let mut rows = Vec::with_capacity(n);
            for _ in 0..n {
                sampler.refill(snapshot);
                match side_bet_row(&mut sampler) {
                    Some(row) => rows.push(row),
                    None => break,
                }
            }
            rows
        })
        .collect();

    let mut report = aggregate(&rows, true)?;
    for bet in [Bet::Main, Bet::Bust] {
        report.ev.remove(&bet);
        report.std_error.remove(&bet);
    }
    Ok(report)
}
