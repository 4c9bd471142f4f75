//! Deck generation tests.
//!
//! - Every image is dealt exactly twice, nothing else is dealt
//! - Fixed seeds reproduce a shuffle
//! - Shuffles are close to uniform

use heart_pairs::cards::{Deck, ImageId};
use heart_pairs::core::GameRng;
use proptest::prelude::*;

proptest! {
    /// Any image list pairs up into a deck of twice its length.
    #[test]
    fn prop_every_image_dealt_twice(n in 1usize..64, seed in any::<u64>()) {
        let images: Vec<ImageId> = (0..n as u16).map(ImageId::new).collect();
        let deck = Deck::build(&images, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), 2 * n);
        prop_assert_eq!(deck.pair_count(), n);

        let mut counts = vec![0usize; n];
        for image in deck.slots() {
            let i = usize::from(image.raw());
            prop_assert!(i < n, "foreign image {} dealt", image);
            counts[i] += 1;
        }
        prop_assert!(counts.iter().all(|&c| c == 2));
    }

    /// Image identities need not be contiguous.
    #[test]
    fn prop_sparse_identities(raw in proptest::collection::btree_set(any::<u16>(), 1..20), seed in any::<u64>()) {
        let images: Vec<ImageId> = raw.iter().copied().map(ImageId::new).collect();
        let deck = Deck::build(&images, &mut GameRng::new(seed));

        let mut dealt = deck.slots().to_vec();
        dealt.sort();
        let mut expected: Vec<ImageId> = images.iter().flat_map(|&i| [i, i]).collect();
        expected.sort();
        prop_assert_eq!(dealt, expected);
    }

    /// A dealt deck is accepted back as an explicit arrangement.
    #[test]
    fn prop_built_decks_are_valid_arrangements(n in 1usize..40, seed in any::<u64>()) {
        let images: Vec<ImageId> = (0..n as u16).map(ImageId::new).collect();
        let deck = Deck::build(&images, &mut GameRng::new(seed));
        let again = Deck::from_slots(deck.slots().to_vec());
        prop_assert_eq!(again, Ok(deck));
    }
}

/// The same seed deals the same deck.
#[test]
fn test_seed_reproduces_shuffle() {
    let images: Vec<ImageId> = (0..18).map(ImageId::new).collect();
    let a = Deck::build(&images, &mut GameRng::new(7));
    let b = Deck::build(&images, &mut GameRng::new(7));
    let c = Deck::build(&images, &mut GameRng::new(8));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// Each slot holds each image with roughly equal frequency.
#[test]
fn test_shuffle_is_uniform() {
    const IMAGES: usize = 3;
    const SLOTS: usize = IMAGES * 2;
    const TRIALS: usize = 30_000;

    let images: Vec<ImageId> = (0..IMAGES as u16).map(ImageId::new).collect();
    let mut rng = GameRng::new(12345);
    let mut hits = [[0usize; IMAGES]; SLOTS];

    for _ in 0..TRIALS {
        let deck = Deck::build(&images, &mut rng);
        for (slot, image) in deck.slots().iter().enumerate() {
            hits[slot][usize::from(image.raw())] += 1;
        }
    }

    // Each image occupies any given slot with probability 2/SLOTS.
    let expected = TRIALS as f64 * 2.0 / SLOTS as f64;
    for (slot, row) in hits.iter().enumerate() {
        for (image, &count) in row.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "slot {slot} held image {image} {count} times, expected about {expected}"
            );
        }
    }
}

/// All 90 distinct arrangements of three pairs show up about equally often.
#[test]
fn test_every_arrangement_reachable() {
    use std::collections::HashMap;

    let images: Vec<ImageId> = (0..3).map(ImageId::new).collect();
    let mut rng = GameRng::new(99);
    let mut seen: HashMap<Vec<ImageId>, usize> = HashMap::new();

    const TRIALS: usize = 45_000;
    for _ in 0..TRIALS {
        let deck = Deck::build(&images, &mut rng);
        *seen.entry(deck.slots().to_vec()).or_default() += 1;
    }

    // 6! / 2^3 = 90
    assert_eq!(seen.len(), 90);

    let expected = TRIALS as f64 / 90.0;
    for count in seen.values() {
        assert!((*count as f64 - expected).abs() / expected < 0.2);
    }
}
