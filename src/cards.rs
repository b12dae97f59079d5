use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EvError, EvResult};

/// Number of distinct (rank, suit) cards.
pub const NUM_CARDS: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub fn from_index(index: u8) -> Option<Rank> {
        ALL_RANKS.get(index as usize).copied()
    }

    /// Position in A..K order, 0 = Ace, 12 = King.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Blackjack value with the Ace counted high.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.index() + 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = EvError;

    fn from_str(s: &str) -> EvResult<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(EvError::InvalidRank(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub fn from_char(c: char) -> EvResult<Suit> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            _ => Err(EvError::InvalidSuit(c)),
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Slot in a count vector: `suit * 13 + rank`.
    pub fn index(&self) -> usize {
        self.suit.index() as usize * 13 + self.rank.index() as usize
    }

    pub fn from_index(index: usize) -> Option<Card> {
        if index >= NUM_CARDS {
            return None;
        }
        let rank = ALL_RANKS[index % 13];
        let suit = ALL_SUITS[index / 13];
        Some(Card::new(rank, suit))
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank, self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = EvError;

    fn from_str(s: &str) -> EvResult<Card> {
        parse_card(s)
    }
}

/// All 52 cards in count-vector order.
pub fn all_cards() -> impl Iterator<Item = Card> {
    (0..NUM_CARDS).filter_map(Card::from_index)
}

/// Parses identifiers such as `"AS"`, `"10H"`, `"Td"` or `"qc"`.
pub fn parse_card(notation: &str) -> EvResult<Card> {
    let notation = notation.trim();
    let mut chars = notation.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| EvError::InvalidCard(notation.to_string()))?;
    let rank_str = chars.as_str();
    if rank_str.is_empty() || rank_str.len() > 2 {
        return Err(EvError::InvalidCard(notation.to_string()));
    }
    let rank = rank_str.parse::<Rank>()?;
    let suit = Suit::from_char(suit_char)?;
    Ok(Card::new(rank, suit))
}

/// Parses a whitespace- or comma-separated list of card identifiers.
pub fn parse_cards(notation: &str) -> EvResult<Vec<Card>> {
    notation
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(parse_card)
        .collect()
}
