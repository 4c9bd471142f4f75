//! Shuffled slot-to-image assignment for one game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::image::ImageId;
use crate::board::SlotIndex;
use crate::core::{ConfigError, GameRng};

/// The slot contents of one game: every image exactly twice.
///
/// Built once before play starts and never modified; only slot *status*
/// changes during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    slots: Vec<ImageId>,
}

impl Deck {
    /// Pair every image and shuffle the result.
    ///
    /// Fisher–Yates: walking down from the last index, swap each position
    /// with a uniformly drawn position at or below it. Every permutation of
    /// the `2 * images.len()` entries is equally likely.
    ///
    /// ```
    /// use heart_pairs::cards::{Deck, ImageId};
    /// use heart_pairs::core::GameRng;
    ///
    /// let images = [ImageId::new(0), ImageId::new(1)];
    /// let deck = Deck::build(&images, &mut GameRng::new(1));
    /// assert_eq!(deck.len(), 4);
    /// ```
    #[must_use]
    pub fn build(images: &[ImageId], rng: &mut GameRng) -> Self {
        let mut slots: Vec<ImageId> = images.iter().flat_map(|&image| [image, image]).collect();

        for i in (1..slots.len()).rev() {
            let j = rng.index_through(i);
            slots.swap(i, j);
        }

        Self { slots }
    }

    /// Use an explicit arrangement instead of shuffling.
    ///
    /// Rejects arrangements where any image does not appear exactly twice.
    pub fn from_slots(slots: Vec<ImageId>) -> Result<Self, ConfigError> {
        let mut counts: FxHashMap<ImageId, usize> = FxHashMap::default();
        for &image in &slots {
            *counts.entry(image).or_default() += 1;
        }

        let mut unpaired: Vec<_> = counts.into_iter().filter(|&(_, count)| count != 2).collect();
        unpaired.sort_unstable();
        if let Some(&(image, count)) = unpaired.first() {
            return Err(ConfigError::UnpairedImage { image, count });
        }

        Ok(Self { slots })
    }

    /// Image held by a slot.
    #[must_use]
    pub fn image_at(&self, slot: SlotIndex) -> Option<ImageId> {
        self.slots.get(slot.index()).copied()
    }

    /// Number of slots (2N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of pairs (N).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.slots.len() / 2
    }

    /// Slot contents in slot order.
    #[must_use]
    pub fn slots(&self) -> &[ImageId] {
        &self.slots
    }
}
