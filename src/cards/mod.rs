//! Card contents: image identities, the asset manifest and the shuffled deck.
//!
//! Slot *contents* are decided once per game by `Deck::build`; everything
//! that changes during play lives in `game`.

pub mod deck;
pub mod image;

pub use deck::Deck;
pub use image::{ImageId, ImageManifest};
