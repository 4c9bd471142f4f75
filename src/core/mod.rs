//! Core engine types: RNG, configuration and errors.
//!
//! Games are configured via `GameConfig`; nothing here knows about turns.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Timing, DEFAULT_SETTLE_DELAY_MS, DEFAULT_WIN_DELAY_MS};
pub use error::ConfigError;
pub use rng::GameRng;
