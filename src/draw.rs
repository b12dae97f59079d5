use rand::Rng;

use crate::cards::{Card, NUM_CARDS};
use crate::shoe::ShoeCounts;

/// Draws one card with probability proportional to its remaining count and
/// removes it from `counts`. Returns `None`, leaving `counts` untouched, when
/// the shoe is empty.
pub fn draw<R: Rng + ?Sized>(counts: &mut ShoeCounts, rng: &mut R) -> Option<Card> {
    let total = counts.total();
    if total == 0 {
        return None;
    }

    let target = rng.gen_range(0..total);
    let chosen = counts
        .slots()
        .iter()
        .scan(0u32, |cumulative, &count| {
            *cumulative += count;
            Some(*cumulative)
        })
        .position(|cumulative| target < cumulative);
    if let Some(index) = chosen {
        if counts.take_slot(index) {
            return Card::from_index(index);
        }
    }

    // Fallback scan, highest slot first. A non-empty shoe always yields a card.
    (0..NUM_CARDS)
        .rev()
        .find(|&index| counts.take_slot(index))
        .and_then(Card::from_index)
}

/// A worker's private shoe and random source. Iterating yields successive
/// draws and ends when the shoe runs dry.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    counts: ShoeCounts,
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(counts: ShoeCounts, rng: R) -> Sampler<R> {
        Sampler { counts, rng }
    }

    pub fn counts(&self) -> &ShoeCounts {
        &self.counts
    }

    /// Replaces the remaining composition, keeping the random stream.
    pub fn refill(&mut self, counts: ShoeCounts) {
        self.counts = counts;
    }
}

impl<R: Rng> Iterator for Sampler<R> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        draw(&mut self.counts, &mut self.rng)
    }
}
