//! # heart-pairs
//!
//! A memory-matching puzzle engine. A set of pictures is paired, shuffled
//! and laid out on a heart-shaped grid; the player turns over two cards per
//! turn, matches stay face-up, and finding every pair fires a one-shot
//! "game won" callback.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: the engine exposes render-ready cell state and
//!    never draws anything itself.
//!
//! 2. **Explicit time**: delays are scheduled through a `Scheduler` and
//!    resolved when the host hands the fired timer back. Dropping a game
//!    cancels its pending delay.
//!
//! 3. **Injected randomness**: a seeded `GameRng` reproduces a shuffle
//!    exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: grid layout and slot indices
//! - `cards`: image identities, manifest, deck
//! - `timer`: scheduler seam, cancel-on-drop timers, manual clock
//! - `game`: the turn protocol and render views
//! - `wasm`: browser bindings (feature `wasm`)

pub mod core;
pub mod board;
pub mod cards;
pub mod timer;
pub mod game;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, Timing};

pub use crate::board::{BoardLayout, Cell, SlotIndex};

pub use crate::cards::{Deck, ImageId, ImageManifest};

pub use crate::timer::{ManualClock, PendingTimer, Scheduler, TimerId, TimerKind};

pub use crate::game::{
    Activation, BoardView, CellView, Game, GameBuilder, IgnoreReason, Mode, Session, SlotState,
    VisualState,
};
