use blackjack_ev::cards::*;
use blackjack_ev::hand::Hand;
use blackjack_ev::sidebets::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

// Perfect Pairs

#[test]
fn test_perfect_pair_same_suit_multi_deck() {
    // two copies of the same card only exist in a multi-deck shoe
    assert_eq!(classify_pair(c("8S"), c("8S")), PairKind::Perfect);
    assert_eq!(perfect_pairs(c("8S"), c("8S")), 25.0);
}

#[test]
fn test_coloured_pair() {
    assert_eq!(perfect_pairs(c("8S"), c("8C")), 12.0);
    assert_eq!(perfect_pairs(c("8H"), c("8D")), 12.0);
}

#[test]
fn test_mixed_pair() {
    assert_eq!(perfect_pairs(c("8S"), c("8H")), 6.0);
    assert_eq!(perfect_pairs(c("8D"), c("8C")), 6.0);
}

#[test]
fn test_no_pair_loses() {
    assert_eq!(perfect_pairs(c("8S"), c("9S")), -1.0);
    // ten-valued but different ranks
    assert_eq!(perfect_pairs(c("10S"), c("KS")), -1.0);
}

// 21+3

#[test]
fn test_suited_trips() {
    assert_eq!(classify_21_plus_3(c("9H"), c("9H"), c("9H")), PokerHand::SuitedTrips);
    assert_eq!(twenty_one_plus_three(c("9H"), c("9H"), c("9H")), 100.0);
}

#[test]
fn test_ace_queen_king_straight_flush() {
    assert_eq!(twenty_one_plus_three(c("AS"), c("QS"), c("KS")), 40.0);
}

#[test]
fn test_low_straight_flush() {
    assert_eq!(twenty_one_plus_three(c("5S"), c("6S"), c("7S")), 40.0);
    assert_eq!(twenty_one_plus_three(c("AD"), c("3D"), c("2D")), 40.0);
}

#[test]
fn test_unsuited_trips() {
    assert_eq!(twenty_one_plus_three(c("QS"), c("QH"), c("QS")), 30.0);
}

#[test]
fn test_straight() {
    assert_eq!(classify_21_plus_3(c("5C"), c("6D"), c("7S")), PokerHand::Straight);
    assert_eq!(twenty_one_plus_three(c("5C"), c("6D"), c("7S")), 10.0);
    assert_eq!(twenty_one_plus_three(c("KC"), c("AD"), c("QS")), 10.0);
}

#[test]
fn test_king_ace_two_is_not_a_straight() {
    assert_eq!(twenty_one_plus_three(c("KC"), c("AD"), c("2S")), -1.0);
}

#[test]
fn test_flush() {
    assert_eq!(twenty_one_plus_three(c("5S"), c("7S"), c("9S")), 5.0);
}

#[test]
fn test_nothing() {
    assert_eq!(twenty_one_plus_three(c("5S"), c("7S"), c("9D")), -1.0);
    assert_eq!(twenty_one_plus_three(c("5S"), c("5H"), c("9D")), -1.0);
}

#[test]
fn test_21_plus_3_order_independent() {
    let a = twenty_one_plus_three(c("7S"), c("5S"), c("6S"));
    let b = twenty_one_plus_three(c("6S"), c("7S"), c("5S"));
    assert_eq!(a, b);
}

// Hot 3

#[test]
fn test_three_sevens() {
    assert_eq!(hot_three(c("7S"), c("7H"), c("7D")), 100.0);
    assert_eq!(hot_three(c("7D"), c("7S"), c("7H")), 100.0);
    assert_eq!(hot_three(c("7S"), c("7S"), c("7S")), 100.0);
}

#[test]
fn test_hot3_twenty_one() {
    assert_eq!(classify_hot3(c("AS"), c("KS"), c("QS")), Hot3Hand::SuitedTwentyOne);
    assert_eq!(hot_three(c("AS"), c("KS"), c("QS")), 20.0);
    assert_eq!(hot_three(c("AS"), c("KH"), c("QS")), 10.0);
    assert_eq!(hot_three(c("5S"), c("6H"), c("KD")), 10.0);
}

#[test]
fn test_hot3_twenty_suited_and_unsuited() {
    assert_eq!(hot_three(c("5H"), c("5H"), c("KH")), 4.0);
    assert_eq!(hot_three(c("5H"), c("5C"), c("KH")), 2.0);
}

#[test]
fn test_hot3_nineteen() {
    assert_eq!(hot_three(c("9S"), c("KH"), c("10D")), -1.0);
    assert_eq!(hot_three(c("9S"), c("5H"), c("5D")), 1.0);
    assert_eq!(hot_three(c("9S"), c("5S"), c("5S")), 1.0);
}

#[test]
fn test_hot3_aces_reduce() {
    // A + A + 9 = soft 21
    assert_eq!(hot_three(c("AS"), c("AH"), c("9D")), 10.0);
}

#[test]
fn test_hot3_loses() {
    assert_eq!(hot_three(c("2S"), c("3H"), c("4D")), -1.0);
}

// Bust

#[test]
fn test_bust_payout_table() {
    assert_eq!(bust_payout(3), 1.0);
    assert_eq!(bust_payout(4), 2.0);
    assert_eq!(bust_payout(5), 15.0);
    assert_eq!(bust_payout(6), 50.0);
    assert_eq!(bust_payout(7), 100.0);
    assert_eq!(bust_payout(8), 250.0);
    assert_eq!(bust_payout(11), 250.0);
    assert_eq!(bust_payout(2), -1.0);
}

#[test]
fn test_dealer_bust_settlement() {
    let busted = Hand::from_cards(&[c("10S"), c("6H"), c("KD")]);
    assert_eq!(dealer_bust(&busted), 1.0);
    let four_card = Hand::from_cards(&[c("2S"), c("4H"), c("10D"), c("QC")]);
    assert_eq!(dealer_bust(&four_card), 2.0);
    let standing = Hand::from_cards(&[c("10S"), c("7H")]);
    assert_eq!(dealer_bust(&standing), -1.0);
}
