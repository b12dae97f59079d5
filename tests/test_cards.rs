use blackjack_ev::cards::*;
use blackjack_ev::error::EvError;

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.rank.value(), 11);
}

#[test]
fn test_rank_values() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Nine.value(), 9);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::King.value(), 10);
}

#[test]
fn test_card_index_layout() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).index(), 0);
    assert_eq!(Card::new(Rank::King, Suit::Spades).index(), 12);
    assert_eq!(Card::new(Rank::Ace, Suit::Hearts).index(), 13);
    assert_eq!(Card::new(Rank::King, Suit::Clubs).index(), 51);
}

#[test]
fn test_index_round_trip() {
    for index in 0..NUM_CARDS {
        let card = Card::from_index(index).unwrap();
        assert_eq!(card.index(), index);
    }
    assert!(Card::from_index(NUM_CARDS).is_none());
}

#[test]
fn test_all_cards_distinct() {
    use std::collections::HashSet;
    let set: HashSet<Card> = all_cards().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn test_parse_card_basic() {
    assert_eq!(parse_card("AS").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(parse_card("10H").unwrap(), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(parse_card("KD").unwrap(), Card::new(Rank::King, Suit::Diamonds));
}

#[test]
fn test_parse_card_aliases_and_case() {
    assert_eq!(parse_card("Td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(parse_card("qc").unwrap(), Card::new(Rank::Queen, Suit::Clubs));
    assert_eq!(parse_card(" 7h ").unwrap(), Card::new(Rank::Seven, Suit::Hearts));
}

#[test]
fn test_parse_card_invalid() {
    assert!(matches!(parse_card(""), Err(EvError::InvalidCard(_))));
    assert!(matches!(parse_card("S"), Err(EvError::InvalidCard(_))));
    assert!(matches!(parse_card("XS"), Err(EvError::InvalidRank(_))));
    assert!(matches!(parse_card("AX"), Err(EvError::InvalidSuit('X'))));
    assert!(matches!(parse_card("100S"), Err(EvError::InvalidCard(_))));
}

#[test]
fn test_card_display() {
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10C");
    assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "AH");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).pretty(), "A\u{2660}");
}

#[test]
fn test_display_parses_back() {
    for card in all_cards() {
        assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
}

#[test]
fn test_parse_cards_list() {
    let cards = parse_cards("AS, 10H KD").unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
    assert!(parse_cards("AS ZZ").is_err());
}

#[test]
fn test_suit_colours() {
    assert!(Suit::Hearts.is_red());
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Spades.is_red());
    assert!(!Suit::Clubs.is_red());
}
