use std::collections::BTreeMap;
use std::fmt;

use crate::cards::{all_cards, parse_card, Card, Rank, Suit, ALL_RANKS, ALL_SUITS, NUM_CARDS};
use crate::error::{EvError, EvResult};

/// Remaining copies of each of the 52 cards, indexed by [`Card::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoeCounts {
    slots: [u32; NUM_CARDS],
}

impl Default for ShoeCounts {
    fn default() -> Self {
        ShoeCounts::empty()
    }
}

impl ShoeCounts {
    pub fn empty() -> ShoeCounts {
        ShoeCounts {
            slots: [0; NUM_CARDS],
        }
    }

    /// `decks` copies of every card. `decks * 52` must fit in a `u32`;
    /// [`Shoe::new`] checks this for user input.
    pub fn with_decks(decks: u32) -> ShoeCounts {
        ShoeCounts {
            slots: [decks; NUM_CARDS],
        }
    }

    /// Fails when the slots add up to more cards than a count can hold.
    pub fn from_slots(slots: [u32; NUM_CARDS]) -> EvResult<ShoeCounts> {
        let counts = ShoeCounts { slots };
        counts.checked_total().ok_or(EvError::ShoeTooLarge)?;
        Ok(counts)
    }

    /// Encodes a card identifier -> count mapping. Cards missing from the
    /// mapping have no copies left; a malformed identifier aborts the encode.
    pub fn encode<I, K>(mapping: I) -> EvResult<ShoeCounts>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: AsRef<str>,
    {
        let mut counts = ShoeCounts::empty();
        for (code, count) in mapping {
            let card = parse_card(code.as_ref())?;
            counts.slots[card.index()] = count;
        }
        counts.checked_total().ok_or(EvError::ShoeTooLarge)?;
        Ok(counts)
    }

    /// Inverse of [`ShoeCounts::encode`], one entry per card.
    pub fn decode(&self) -> BTreeMap<String, u32> {
        all_cards()
            .map(|card| (card.to_string(), self.get(card)))
            .collect()
    }

    pub fn slots(&self) -> &[u32; NUM_CARDS] {
        &self.slots
    }

    pub fn get(&self, card: Card) -> u32 {
        self.slots[card.index()]
    }

    pub(crate) fn set(&mut self, card: Card, count: u32) {
        self.slots[card.index()] = count;
    }

    /// Every constructor keeps this within `u32`.
    pub fn total(&self) -> u32 {
        self.slots.iter().sum()
    }

    fn checked_total(&self) -> Option<u32> {
        self.slots
            .iter()
            .try_fold(0u32, |acc, &count| acc.checked_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|&c| c == 0)
    }

    /// Removes one copy of `card`.
    pub fn take(&mut self, card: Card) -> EvResult<()> {
        let slot = &mut self.slots[card.index()];
        if *slot == 0 {
            return Err(EvError::CardUnavailable(card));
        }
        *slot -= 1;
        Ok(())
    }

    /// Decrements the slot at `index` when it holds a card.
    pub(crate) fn take_slot(&mut self, index: usize) -> bool {
        match self.slots[index].checked_sub(1) {
            Some(left) => {
                self.slots[index] = left;
                true
            }
            None => false,
        }
    }

    pub fn rank_count(&self, rank: Rank) -> u32 {
        all_cards()
            .filter(|card| card.rank == rank)
            .map(|card| self.get(card))
            .sum()
    }

    /// Probability of each rank being the next card, highest first.
    pub fn next_rank_probabilities(&self) -> Vec<(Rank, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut probs: Vec<(Rank, f64)> = ALL_RANKS
            .iter()
            .map(|&rank| (rank, self.rank_count(rank) as f64 / total as f64))
            .collect();
        probs.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        probs
    }

    pub fn suit_count(&self, suit: Suit) -> u32 {
        all_cards()
            .filter(|card| card.suit == suit)
            .map(|card| self.get(card))
            .sum()
    }

    /// Probability of each suit being the next card, highest first. Suits
    /// with no cards left are omitted.
    pub fn next_suit_probabilities(&self) -> Vec<(Suit, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut probs: Vec<(Suit, f64)> = ALL_SUITS
            .iter()
            .filter(|&&suit| self.suit_count(suit) > 0)
            .map(|&suit| (suit, self.suit_count(suit) as f64 / total as f64))
            .collect();
        probs.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        probs
    }

    /// The `top_n` most likely next cards.
    pub fn next_card_probabilities(&self, top_n: usize) -> Vec<(Card, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut probs: Vec<(Card, f64)> = all_cards()
            .filter(|&card| self.get(card) > 0)
            .map(|card| (card, self.get(card) as f64 / total as f64))
            .collect();
        probs.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        probs.truncate(top_n);
        probs
    }
}

/// A physical multi-deck shoe that cards are dealt out of.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u32,
    counts: ShoeCounts,
}

impl Shoe {
    pub fn new(decks: u32) -> EvResult<Shoe> {
        if decks == 0 || decks.checked_mul(NUM_CARDS as u32).is_none() {
            return Err(EvError::InvalidDeckCount(decks));
        }
        Ok(Shoe {
            decks,
            counts: ShoeCounts::with_decks(decks),
        })
    }

    pub fn decks(&self) -> u32 {
        self.decks
    }

    pub fn reset(&mut self) {
        self.counts = ShoeCounts::with_decks(self.decks);
    }

    /// Marks `card` as dealt.
    pub fn remove(&mut self, card: Card) -> EvResult<()> {
        self.counts.take(card)
    }

    pub fn remove_all(&mut self, cards: &[Card]) -> EvResult<()> {
        for &card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Puts a previously dealt card back.
    pub fn restore(&mut self, card: Card) -> EvResult<()> {
        let count = self.counts.get(card);
        if count >= self.decks {
            return Err(EvError::CardAtCapacity(card));
        }
        self.counts.set(card, count + 1);
        Ok(())
    }

    pub fn initial_cards(&self) -> u32 {
        NUM_CARDS as u32 * self.decks
    }

    pub fn remaining(&self) -> u32 {
        self.counts.total()
    }

    pub fn decks_remaining(&self) -> f64 {
        self.remaining() as f64 / NUM_CARDS as f64
    }

    /// Fraction of the shoe already dealt.
    pub fn penetration(&self) -> f64 {
        let initial = self.initial_cards();
        (initial - self.remaining()) as f64 / initial as f64
    }

    /// Snapshot of the remaining composition.
    pub fn counts(&self) -> ShoeCounts {
        self.counts
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} decks, {}/{} cards remaining",
            self.decks,
            self.remaining(),
            self.initial_cards()
        )
    }
}
