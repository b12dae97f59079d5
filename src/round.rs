use serde::Serialize;

use crate::cards::Card;
use crate::dealer::play_dealer;
use crate::hand::Hand;
use crate::sidebets::{dealer_bust, hot_three, perfect_pairs, twenty_one_plus_three};
use crate::strategy::play_player;

/// Payout of a player blackjack.
pub const NATURAL_PAYOUT: f64 = 1.5;

/// Per-unit results of every bet in one simulated round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Outcome {
    pub main: f64,
    pub bust: f64,
    pub twenty_one_plus_three: f64,
    pub perfect_pairs: f64,
    pub hot_three: f64,
}

impl Outcome {
    pub const WIDTH: usize = 5;

    /// Column order: main, bust, 21+3, perfect pairs, hot 3.
    pub fn to_array(&self) -> [f64; Outcome::WIDTH] {
        [
            self.main,
            self.bust,
            self.twenty_one_plus_three,
            self.perfect_pairs,
            self.hot_three,
        ]
    }

    /// No cards reached the table: the opening deal ran out of cards.
    pub fn is_void(&self) -> bool {
        self.to_array().iter().all(|&v| v == 0.0)
    }
}

/// Settles the main bet once both hands are final.
pub fn resolve_main(player_total: u8, dealer_total: u8, multiplier: f64) -> f64 {
    if player_total > 21 {
        -multiplier
    } else if dealer_total > 21 || player_total > dealer_total {
        multiplier
    } else if player_total < dealer_total {
        -multiplier
    } else {
        0.0
    }
}

/// Plays one round from `cards`: deal, naturals, player policy, dealer
/// policy, settlement. Side bets are scored from the first three cards and
/// stand regardless of how the main hand goes.
pub fn simulate_round<I>(cards: &mut I) -> Outcome
where
    I: Iterator<Item = Card>,
{
    let mut outcome = Outcome::default();

    let (p1, p2, up) = match (cards.next(), cards.next(), cards.next()) {
        (Some(p1), Some(p2), Some(up)) => (p1, p2, up),
        _ => return outcome,
    };

    outcome.twenty_one_plus_three = twenty_one_plus_three(p1, p2, up);
    outcome.perfect_pairs = perfect_pairs(p1, p2);
    outcome.hot_three = hot_three(p1, p2, up);

    let hole = match cards.next() {
        Some(card) => card,
        None => return outcome,
    };
    let mut player = Hand::from_cards(&[p1, p2]);
    let mut dealer = Hand::from_cards(&[up, hole]);

    if player.is_natural() {
        outcome.main = if dealer.is_natural() { 0.0 } else { NATURAL_PAYOUT };
        return outcome;
    }
    if dealer.is_natural() {
        outcome.main = -1.0;
        return outcome;
    }

    let played = play_player(&mut player, up.rank, cards);
    let dealer_total = play_dealer(&mut dealer, cards);

    outcome.main = resolve_main(played.total, dealer_total, played.multiplier);
    outcome.bust = dealer_bust(&dealer);
    outcome
}
