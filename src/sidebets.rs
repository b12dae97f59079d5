//! Side-bet evaluators. Every payout is per unit staked; a lost bet is -1.

use std::fmt;

use itertools::Itertools;

use crate::cards::{Card, Rank};
use crate::hand::{hand_value, Hand};

pub const LOSS: f64 = -1.0;

// ---------------------------------------------------------------------------
// Perfect Pairs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    /// Same rank and suit.
    Perfect,
    /// Same rank and colour, different suit.
    Coloured,
    /// Same rank, one red and one black.
    Mixed,
    NoPair,
}

impl PairKind {
    pub fn payout(self) -> f64 {
        match self {
            PairKind::Perfect => 25.0,
            PairKind::Coloured => 12.0,
            PairKind::Mixed => 6.0,
            PairKind::NoPair => LOSS,
        }
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairKind::Perfect => write!(f, "Perfect Pair"),
            PairKind::Coloured => write!(f, "Coloured Pair"),
            PairKind::Mixed => write!(f, "Mixed Pair"),
            PairKind::NoPair => write!(f, "No Pair"),
        }
    }
}

pub fn classify_pair(first: Card, second: Card) -> PairKind {
    if first.rank != second.rank {
        PairKind::NoPair
    } else if first.suit == second.suit {
        PairKind::Perfect
    } else if first.suit.is_red() == second.suit.is_red() {
        PairKind::Coloured
    } else {
        PairKind::Mixed
    }
}

/// Perfect Pairs on the player's first two cards.
pub fn perfect_pairs(first: Card, second: Card) -> f64 {
    classify_pair(first, second).payout()
}

// ---------------------------------------------------------------------------
// 21+3
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokerHand {
    SuitedTrips,
    StraightFlush,
    ThreeOfAKind,
    Straight,
    Flush,
    Nothing,
}

impl PokerHand {
    pub fn payout(self) -> f64 {
        match self {
            PokerHand::SuitedTrips => 100.0,
            PokerHand::StraightFlush => 40.0,
            PokerHand::ThreeOfAKind => 30.0,
            PokerHand::Straight => 10.0,
            PokerHand::Flush => 5.0,
            PokerHand::Nothing => LOSS,
        }
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokerHand::SuitedTrips => write!(f, "Suited Trips"),
            PokerHand::StraightFlush => write!(f, "Straight Flush"),
            PokerHand::ThreeOfAKind => write!(f, "Three of a Kind"),
            PokerHand::Straight => write!(f, "Straight"),
            PokerHand::Flush => write!(f, "Flush"),
            PokerHand::Nothing => write!(f, "Nothing"),
        }
    }
}

fn is_straight(cards: &[Card; 3]) -> bool {
    let ranks: Vec<u8> = cards.iter().map(|c| c.rank.index()).sorted().dedup().collect();
    if ranks.len() != 3 {
        return false;
    }
    // Ace plays high with Queen and King.
    ranks[2] - ranks[0] == 2
        || ranks == [Rank::Ace.index(), Rank::Queen.index(), Rank::King.index()]
}

pub fn classify_21_plus_3(first: Card, second: Card, dealer_up: Card) -> PokerHand {
    let cards = [first, second, dealer_up];
    let flush = cards.iter().map(|c| c.suit).all_equal();
    let trips = cards.iter().map(|c| c.rank).all_equal();
    let straight = is_straight(&cards);

    match (trips, straight, flush) {
        (true, _, true) => PokerHand::SuitedTrips,
        (_, true, true) => PokerHand::StraightFlush,
        (true, _, false) => PokerHand::ThreeOfAKind,
        (_, true, false) => PokerHand::Straight,
        (false, false, true) => PokerHand::Flush,
        (false, false, false) => PokerHand::Nothing,
    }
}

/// 21+3 on the player's two cards plus the dealer's up-card.
pub fn twenty_one_plus_three(first: Card, second: Card, dealer_up: Card) -> f64 {
    classify_21_plus_3(first, second, dealer_up).payout()
}

// ---------------------------------------------------------------------------
// Hot 3
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hot3Hand {
    SevensTrips,
    SuitedTwentyOne,
    TwentyOne,
    SuitedTwenty,
    Twenty,
    Nineteen,
    Nothing,
}

impl Hot3Hand {
    pub fn payout(self) -> f64 {
        match self {
            Hot3Hand::SevensTrips => 100.0,
            Hot3Hand::SuitedTwentyOne => 20.0,
            Hot3Hand::TwentyOne => 10.0,
            Hot3Hand::SuitedTwenty => 4.0,
            Hot3Hand::Twenty => 2.0,
            Hot3Hand::Nineteen => 1.0,
            Hot3Hand::Nothing => LOSS,
        }
    }
}

impl fmt::Display for Hot3Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hot3Hand::SevensTrips => write!(f, "7-7-7"),
            Hot3Hand::SuitedTwentyOne => write!(f, "Suited 21"),
            Hot3Hand::TwentyOne => write!(f, "21"),
            Hot3Hand::SuitedTwenty => write!(f, "Suited 20"),
            Hot3Hand::Twenty => write!(f, "20"),
            Hot3Hand::Nineteen => write!(f, "19"),
            Hot3Hand::Nothing => write!(f, "Nothing"),
        }
    }
}

pub fn classify_hot3(first: Card, second: Card, dealer_up: Card) -> Hot3Hand {
    let cards = [first, second, dealer_up];
    if cards.iter().all(|c| c.rank == Rank::Seven) {
        return Hot3Hand::SevensTrips;
    }

    let ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    let suited = cards.iter().map(|c| c.suit).all_equal();
    match (hand_value(&ranks).total, suited) {
        (21, true) => Hot3Hand::SuitedTwentyOne,
        (21, false) => Hot3Hand::TwentyOne,
        (20, true) => Hot3Hand::SuitedTwenty,
        (20, false) => Hot3Hand::Twenty,
        (19, _) => Hot3Hand::Nineteen,
        _ => Hot3Hand::Nothing,
    }
}

/// Hot 3 on the player's two cards plus the dealer's up-card.
pub fn hot_three(first: Card, second: Card, dealer_up: Card) -> f64 {
    classify_hot3(first, second, dealer_up).payout()
}

// ---------------------------------------------------------------------------
// Dealer bust
// ---------------------------------------------------------------------------

/// Payout for a dealer bust, keyed by how many cards the dealer ended with.
pub fn bust_payout(card_count: usize) -> f64 {
    match card_count {
        3 => 1.0,
        4 => 2.0,
        5 => 15.0,
        6 => 50.0,
        7 => 100.0,
        n if n >= 8 => 250.0,
        _ => LOSS,
    }
}

/// Settles the bust bet against the dealer's final hand.
pub fn dealer_bust(dealer: &Hand) -> f64 {
    if dealer.value().is_bust() {
        bust_payout(dealer.len())
    } else {
        LOSS
    }
}
