use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::NUM_CARDS;
use crate::error::{EvError, EvResult};

/// How a worker's shoe evolves from one round to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Depletion {
    /// Rounds keep consuming the worker's copy of the shoe. Once it runs
    /// dry every further round is void.
    Carry,
    /// Every round starts again from the worker's copy of the snapshot.
    #[default]
    Fresh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub rounds: usize,
    pub workers: usize,
    /// Fixed seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Report the 21+3, Perfect Pairs and Hot 3 columns.
    pub side_bets: bool,
    pub depletion: Depletion,
    /// Shoe size used when no composition is supplied.
    pub decks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            rounds: 500_000,
            workers: default_workers(),
            seed: None,
            side_bets: true,
            depletion: Depletion::default(),
            decks: SimConfig::DEFAULT_DECKS,
        }
    }
}

pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Command-line values that take precedence over a config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub decks: Option<u32>,
    pub rounds: Option<usize>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
    pub no_side_bets: bool,
    pub carry: bool,
}

impl SimConfig {
    pub const DEFAULT_DECKS: u32 = 8;

    /// Applies every override that was given; absent ones leave the field
    /// as loaded.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(decks) = overrides.decks {
            self.decks = decks;
        }
        if let Some(rounds) = overrides.rounds {
            self.rounds = rounds;
        }
        if let Some(workers) = overrides.workers {
            self.workers = workers;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.no_side_bets {
            self.side_bets = false;
        }
        if overrides.carry {
            self.depletion = Depletion::Carry;
        }
    }

    pub fn from_json_str(json: &str) -> EvResult<SimConfig> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> EvResult<SimConfig> {
        let raw = fs::read_to_string(path)?;
        SimConfig::from_json_str(&raw)
    }

    pub fn validate(&self) -> EvResult<()> {
        if self.workers == 0 {
            return Err(EvError::InvalidWorkerCount);
        }
        if self.decks == 0 || self.decks.checked_mul(NUM_CARDS as u32).is_none() {
            return Err(EvError::InvalidDeckCount(self.decks));
        }
        Ok(())
    }
}
