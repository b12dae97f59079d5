use std::fmt;

use crate::cards::{Card, Rank};

/// Total of a hand after ace reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    pub total: u8,
    /// At least one Ace is still counted as 11.
    pub soft: bool,
}

impl HandValue {
    pub fn is_bust(&self) -> bool {
        self.total > 21
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.soft {
            write!(f, "soft {}", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// Counts every Ace as 11, then demotes Aces to 1 one at a time while the
/// total is over 21.
pub fn hand_value(ranks: &[Rank]) -> HandValue {
    let mut total: u32 = ranks.iter().map(|r| r.value() as u32).sum();
    let mut high_aces = ranks.iter().filter(|&&r| r == Rank::Ace).count();

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    HandValue {
        total: total.min(u8::MAX as u32) as u8,
        soft: high_aces > 0,
    }
}

/// Cards held by one seat for the duration of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn from_cards(cards: &[Card]) -> Hand {
        Hand {
            cards: cards.to_vec(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ranks(&self) -> Vec<Rank> {
        self.cards.iter().map(|c| c.rank).collect()
    }

    /// Recomputed from the cards on every call.
    pub fn value(&self) -> HandValue {
        hand_value(&self.ranks())
    }

    pub fn total(&self) -> u8 {
        self.value().total
    }

    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{} ({})", cards.join(" "), self.value())
    }
}
