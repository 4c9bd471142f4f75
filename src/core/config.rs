//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `ImageManifest`: the N unique pictures
//! - `BoardLayout`: where the 2N slots sit on the grid
//! - `Timing`: settle and win-presentation delays
//!
//! The layout and manifest are paired here; `validate` fails fast if they
//! do not describe exactly two cells per picture.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::board::BoardLayout;
use crate::cards::ImageManifest;

/// Default pause before a mismatched pair flips back.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Default pause between the final match and the win signal.
pub const DEFAULT_WIN_DELAY_MS: u64 = 500;

/// Delays used by the turn protocol, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// How long a mismatched pair stays face-up.
    pub settle_delay_ms: u64,

    /// How long after the final match the win is signalled.
    pub win_delay_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            win_delay_ms: DEFAULT_WIN_DELAY_MS,
        }
    }
}

impl Timing {
    /// Settle delay as a `Duration`.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Win-presentation delay as a `Duration`.
    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Unique pictures; `ImageId(i)` is entry `i`.
    pub manifest: ImageManifest,

    /// Grid placement of the slots.
    pub layout: BoardLayout,

    /// Turn-protocol delays.
    #[serde(default)]
    pub timing: Timing,
}

impl GameConfig {
    /// Create a configuration with default timing.
    #[must_use]
    pub fn new(manifest: ImageManifest, layout: BoardLayout) -> Self {
        Self {
            manifest,
            layout,
            timing: Timing::default(),
        }
    }

    /// The reference game: 18 photos on the heart layout.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(ImageManifest::reference(), BoardLayout::heart())
    }

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.timing.settle_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the win-presentation delay.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.timing.win_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Number of slots on the board.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.layout.slot_count()
    }

    /// Check that the manifest is valid and the layout has exactly two
    /// cells per image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.manifest.validate()?;

        let images = self.manifest.len();
        let slots = self.layout.slot_count();
        if slots != images * 2 {
            return Err(ConfigError::SizeMismatch {
                slots,
                images,
                expected: images * 2,
            });
        }

        Ok(())
    }
}
