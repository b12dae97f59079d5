//! Fixed player policy: a simplified basic-strategy table without splits.
//!
//! Dealer up-cards are compared by rank index (0 = Ace, 1 = Two, ...,
//! 9..=12 = ten-valued), so "up-rank 2..=5" covers a showing Three to Six.

use std::fmt;

use crate::cards::{Card, Rank};
use crate::hand::{hand_value, Hand, HandValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Hit,
    Stand,
    Double,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Hit => write!(f, "Hit"),
            Action::Stand => write!(f, "Stand"),
            Action::Double => write!(f, "Double"),
        }
    }
}

/// How the player's hand finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerResult {
    pub total: u8,
    /// 2.0 after a double down, else 1.0.
    pub multiplier: f64,
}

fn should_double(value: HandValue, up: u8) -> bool {
    if value.soft {
        matches!(value.total, 17 | 18) && (2..=5).contains(&up)
    } else {
        match value.total {
            11 => true,
            10 => up <= 8,
            9 => (2..=5).contains(&up),
            _ => false,
        }
    }
}

fn should_stand(value: HandValue, up: u8) -> bool {
    let total = value.total;
    if total >= 21 {
        return true;
    }
    if value.soft {
        total >= 19 || (total == 18 && up <= 7)
    } else {
        total >= 17 || (total >= 13 && up <= 5) || (total == 12 && (3..=5).contains(&up))
    }
}

/// Policy decision for `hand` against the dealer's up-card. Doubling is only
/// offered on the first two cards.
pub fn player_action(hand: &[Rank], dealer_up: Rank) -> Action {
    let value = hand_value(hand);
    let up = dealer_up.index();

    if hand.len() == 2 && should_double(value, up) {
        return Action::Double;
    }
    if should_stand(value, up) {
        Action::Stand
    } else {
        Action::Hit
    }
}

/// Plays `hand` to completion, drawing from `cards`. Running out of cards
/// stands on the current total.
pub fn play_player<I>(hand: &mut Hand, dealer_up: Rank, cards: &mut I) -> PlayerResult
where
    I: Iterator<Item = Card>,
{
    loop {
        match player_action(&hand.ranks(), dealer_up) {
            Action::Stand => {
                return PlayerResult {
                    total: hand.total(),
                    multiplier: 1.0,
                };
            }
            Action::Double => {
                if let Some(card) = cards.next() {
                    hand.push(card);
                }
                return PlayerResult {
                    total: hand.total(),
                    multiplier: 2.0,
                };
            }
            Action::Hit => match cards.next() {
                Some(card) => hand.push(card),
                None => {
                    return PlayerResult {
                        total: hand.total(),
                        multiplier: 1.0,
                    };
                }
            },
        }
    }
}
