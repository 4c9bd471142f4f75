//! Configuration errors.
//!
//! A game either starts from a fully valid configuration or not at all.
//! Invalid player input is never an error; see `game::IgnoreReason`.

use thiserror::Error;

use crate::cards::ImageId;

/// Fatal configuration problems, detected before any game starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The layout has no rows or no columns.
    #[error("board layout is empty")]
    EmptyLayout,

    /// A layout row has a different width than the first row.
    #[error("board layout row {row} has {found} columns, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A slot index appears in more than one cell.
    #[error("slot {slot} appears more than once in the board layout")]
    DuplicateSlot { slot: u16 },

    /// The playable cells do not cover `[0, slot_count)`.
    #[error("board layout is missing slot {slot} (layout has {slot_count} playable cells)")]
    MissingSlot { slot: u16, slot_count: usize },

    /// The image manifest is empty.
    #[error("image manifest is empty")]
    NoImages,

    /// Two manifest entries name the same asset.
    #[error("image manifest lists {path:?} more than once")]
    DuplicateImage { path: String },

    /// The manifest has too many entries to pair up on a board.
    #[error("image manifest has {count} entries, at most {max} are supported")]
    TooManyImages { count: usize, max: usize },

    /// The layout does not have exactly two cells per image.
    #[error("board layout has {slots} playable cells but {images} images need {expected}")]
    SizeMismatch {
        slots: usize,
        images: usize,
        expected: usize,
    },

    /// An explicit deck does not hold every image exactly twice.
    #[error("deck holds image {image} {count} times, expected exactly 2")]
    UnpairedImage { image: ImageId, count: usize },

    /// An explicit deck references an image outside the manifest.
    #[error("deck references image {image} which is not in the manifest")]
    UnknownImage { image: ImageId },

    /// An explicit deck is the wrong length for the layout.
    #[error("deck has {found} slots, layout expects {expected}")]
    DeckLength { expected: usize, found: usize },
}
