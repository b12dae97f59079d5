//! Parallel Monte Carlo driver: splits the requested rounds across workers,
//! plays each worker's chunk against a private copy of the shoe, and reduces
//! the outcome rows to a mean per bet.

use std::collections::BTreeMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{Depletion, SimConfig};
use crate::draw::Sampler;
use crate::error::{EvError, EvResult};
use crate::round::{simulate_round, Outcome};
use crate::shoe::ShoeCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bet {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "bust")]
    Bust,
    #[serde(rename = "21+3")]
    TwentyOnePlusThree,
    #[serde(rename = "perfect-pairs")]
    PerfectPairs,
    #[serde(rename = "hot-3")]
    HotThree,
}

impl Bet {
    pub const ALL: [Bet; Outcome::WIDTH] = [
        Bet::Main,
        Bet::Bust,
        Bet::TwentyOnePlusThree,
        Bet::PerfectPairs,
        Bet::HotThree,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Bet::Main => "main",
            Bet::Bust => "bust",
            Bet::TwentyOnePlusThree => "21+3",
            Bet::PerfectPairs => "perfect-pairs",
            Bet::HotThree => "hot-3",
        }
    }

    /// Index of this bet's column in [`Outcome::to_array`].
    pub fn column(self) -> usize {
        self as usize
    }

    pub fn is_side_bet(self) -> bool {
        matches!(
            self,
            Bet::TwentyOnePlusThree | Bet::PerfectPairs | Bet::HotThree
        )
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean return per unit stake for each simulated bet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvReport {
    pub rounds: usize,
    /// Rounds whose opening deal ran out of cards; they count as zero rows.
    pub voided: usize,
    pub ev: BTreeMap<Bet, f64>,
    pub std_error: BTreeMap<Bet, f64>,
}

impl EvReport {
    pub fn get(&self, bet: Bet) -> Option<f64> {
        self.ev.get(&bet).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ev.is_empty()
    }

    pub fn named(&self) -> BTreeMap<&'static str, f64> {
        self.ev.iter().map(|(bet, &ev)| (bet.name(), ev)).collect()
    }
}

/// Splits `total` rounds over `workers` as evenly as possible; the first
/// `total % workers` workers take one extra round.
pub fn split_rounds(total: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let base = total / workers;
    let extra = total % workers;
    (0..workers)
        .map(|i| base + usize::from(i < extra))
        .filter(|&n| n > 0)
        .collect()
}

/// Independent generator for one worker; `seed + worker` when seeded.
pub(crate) fn worker_rng(seed: Option<u64>, worker: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Plays `rounds` rounds sequentially against a private copy of `snapshot`.
pub fn run_chunk<R: Rng>(
    snapshot: &ShoeCounts,
    rounds: usize,
    depletion: Depletion,
    rng: R,
) -> Vec<Outcome> {
    let mut sampler = Sampler::new(*snapshot, rng);
    let mut rows = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        if depletion == Depletion::Fresh {
            sampler.refill(*snapshot);
        }
        rows.push(simulate_round(&mut sampler));
    }
    rows
}

/// Column means (and standard errors) of `rows`. Fails on the first
/// non-finite value rather than averaging it in.
pub fn aggregate(rows: &[Outcome], side_bets: bool) -> EvResult<EvReport> {
    let mut report = EvReport {
        rounds: rows.len(),
        ..EvReport::default()
    };
    if rows.is_empty() {
        return Ok(report);
    }

    let mut sums = [0.0f64; Outcome::WIDTH];
    let mut squares = [0.0f64; Outcome::WIDTH];
    for (row, outcome) in rows.iter().enumerate() {
        let values = outcome.to_array();
        for bet in Bet::ALL {
            let v = values[bet.column()];
            if !v.is_finite() {
                return Err(EvError::NonFiniteOutcome {
                    row,
                    bet: bet.name(),
                });
            }
            sums[bet.column()] += v;
            squares[bet.column()] += v * v;
        }
        if outcome.is_void() {
            report.voided += 1;
        }
    }

    let n = rows.len() as f64;
    for bet in Bet::ALL {
        if bet.is_side_bet() && !side_bets {
            continue;
        }
        let mean = sums[bet.column()] / n;
        let std_error = if rows.len() > 1 {
            let variance = (squares[bet.column()] - n * mean * mean) / (n - 1.0);
            (variance.max(0.0) / n).sqrt()
        } else {
            0.0
        };
        report.ev.insert(bet, mean);
        report.std_error.insert(bet, std_error);
    }
    Ok(report)
}

/// Runs `config.rounds` rounds against `counts` on `config.workers` workers.
pub fn simulate(counts: &ShoeCounts, config: &SimConfig) -> EvResult<EvReport> {
    if config.rounds == 0 {
        return Ok(EvReport::default());
    }
    if config.workers == 0 {
        return Err(EvError::InvalidWorkerCount);
    }

    let shares = split_rounds(config.rounds, config.workers);
    log::info!(
        "simulating {} rounds on {} workers ({} cards in shoe, {:?} depletion)",
        config.rounds,
        shares.len(),
        counts.total(),
        config.depletion,
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(shares.len())
        .build()?;
    let snapshot = *counts;
    let chunks: Vec<Vec<Outcome>> = pool.install(|| {
        shares
            .par_iter()
            .enumerate()
            .map(|(worker, &rounds)| {
                log::debug!("worker {} playing {} rounds", worker, rounds);
                let rng = worker_rng(config.seed, worker);
                run_chunk(&snapshot, rounds, config.depletion, rng)
            })
            .collect()
    });

    let rows: Vec<Outcome> = chunks.into_iter().flatten().collect();
    let report = aggregate(&rows, config.side_bets)?;
    if report.voided > 0 {
        log::warn!(
            "{} of {} rounds could not be dealt from the remaining shoe",
            report.voided,
            report.rounds
        );
    }
    Ok(report)
}

/// `simulate` with rounds carrying depletion within each worker and every
/// other knob at its default. Rounds past what a worker's shoe can deal come
/// back void.
pub fn run(
    counts: &ShoeCounts,
    total_rounds: usize,
    workers: usize,
    seed: Option<u64>,
) -> EvResult<EvReport> {
    let config = SimConfig {
        rounds: total_rounds,
        workers,
        seed,
        depletion: Depletion::Carry,
        ..SimConfig::default()
    };
    simulate(counts, &config)
}
