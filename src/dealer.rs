use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;

use crate::cards::Card;
use crate::draw::draw;
use crate::error::EvResult;
use crate::hand::Hand;
use crate::shoe::ShoeCounts;

/// The dealer stands on every 17, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

pub fn dealer_draws(hand: &Hand) -> bool {
    hand.total() < DEALER_STANDS_ON
}

/// Draws for the dealer until the hand reaches 17 or the cards run out.
/// Returns the final total.
pub fn play_dealer<I>(hand: &mut Hand, cards: &mut I) -> u8
where
    I: Iterator<Item = Card>,
{
    while dealer_draws(hand) {
        match cards.next() {
            Some(card) => hand.push(card),
            None => break,
        }
    }
    hand.total()
}

/// Where a dealer hand ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DealerFinal {
    Total(u8),
    Bust,
}

impl fmt::Display for DealerFinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealerFinal::Total(t) => write!(f, "{}", t),
            DealerFinal::Bust => write!(f, "Bust"),
        }
    }
}

/// Estimates the distribution of the dealer's final total given the up-card,
/// by playing the dealer out `simulations` times from the remaining shoe.
/// The up-card must still be present in `counts`; it is taken out before
/// sampling.
pub fn final_total_distribution<R: Rng + ?Sized>(
    counts: &ShoeCounts,
    up_card: Card,
    simulations: usize,
    rng: &mut R,
) -> EvResult<BTreeMap<DealerFinal, f64>> {
    let mut remaining = *counts;
    remaining.take(up_card)?;

    let mut tally: BTreeMap<DealerFinal, usize> = BTreeMap::new();
    for _ in 0..simulations {
        let mut shoe = remaining;
        let mut hand = Hand::from_cards(&[up_card]);
        let mut cards = std::iter::from_fn(|| draw(&mut shoe, &mut *rng));
        let total = play_dealer(&mut hand, &mut cards);
        let outcome = if total > 21 {
            DealerFinal::Bust
        } else {
            DealerFinal::Total(total)
        };
        *tally.entry(outcome).or_insert(0) += 1;
    }

    Ok(tally
        .into_iter()
        .map(|(outcome, n)| (outcome, n as f64 / simulations as f64))
        .collect())
}
