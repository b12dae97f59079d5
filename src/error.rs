use thiserror::Error;

use crate::cards::Card;

#[derive(Error, Debug)]
pub enum EvError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card identifier: {0}")]
    InvalidCard(String),

    #[error("Card {0} is not available in the shoe")]
    CardUnavailable(Card),

    #[error("Cannot restore {0}; every copy is already in the shoe")]
    CardAtCapacity(Card),

    #[error("Deck count must be positive, got {0}")]
    InvalidDeckCount(u32),

    #[error("Shoe holds more cards than can be counted")]
    ShoeTooLarge,

    #[error("Worker count must be positive")]
    InvalidWorkerCount,

    #[error("Non-finite {bet} outcome in row {row}")]
    NonFiniteOutcome { row: usize, bet: &'static str },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type EvResult<T> = Result<T, EvError>;
