use rand::rngs::StdRng;
use rand::SeedableRng;

use blackjack_ev::cards::*;
use blackjack_ev::draw::*;
use blackjack_ev::shoe::ShoeCounts;

#[test]
fn test_draw_from_empty_returns_none() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = ShoeCounts::empty();
    assert!(draw(&mut counts, &mut rng).is_none());
    assert_eq!(counts, ShoeCounts::empty());
}

#[test]
fn test_draw_exhausts_after_exactly_total() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts = ShoeCounts::with_decks(2);
    let total = counts.total();
    for remaining in (0..total).rev() {
        assert!(draw(&mut counts, &mut rng).is_some());
        assert_eq!(counts.total(), remaining);
    }
    assert!(counts.is_empty());
    assert!(draw(&mut counts, &mut rng).is_none());
}

#[test]
fn test_draw_single_card_shoe() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut counts = ShoeCounts::encode([("9D", 1)]).unwrap();
    assert_eq!(draw(&mut counts, &mut rng), Some(parse_card("9D").unwrap()));
    assert!(counts.is_empty());
}

#[test]
fn test_draw_never_takes_missing_card() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut counts = ShoeCounts::encode([("AS", 5), ("KC", 5)]).unwrap();
    while let Some(card) = draw(&mut counts, &mut rng) {
        assert!(card == parse_card("AS").unwrap() || card == parse_card("KC").unwrap());
    }
}

#[test]
fn test_draw_is_proportional_to_counts() {
    let mut rng = StdRng::seed_from_u64(42);
    let snapshot = ShoeCounts::encode([("2H", 300), ("3H", 100)]).unwrap();
    let trials = 20_000;
    let mut twos = 0;
    for _ in 0..trials {
        let mut counts = snapshot;
        if draw(&mut counts, &mut rng).unwrap().rank == Rank::Two {
            twos += 1;
        }
    }
    let freq = twos as f64 / trials as f64;
    assert!((freq - 0.75).abs() < 0.02, "freq {}", freq);
}

#[test]
fn test_sampler_iterates_whole_shoe() {
    let counts = ShoeCounts::with_decks(1);
    let sampler = Sampler::new(counts, StdRng::seed_from_u64(5));
    let drawn: Vec<Card> = sampler.collect();
    assert_eq!(drawn.len(), 52);
    let unique: std::collections::HashSet<Card> = drawn.into_iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn test_sampler_refill() {
    let mut sampler = Sampler::new(ShoeCounts::encode([("5S", 1)]).unwrap(), StdRng::seed_from_u64(9));
    assert!(sampler.next().is_some());
    assert!(sampler.next().is_none());
    sampler.refill(ShoeCounts::encode([("5S", 1)]).unwrap());
    assert_eq!(sampler.counts().total(), 1);
    assert!(sampler.next().is_some());
}
