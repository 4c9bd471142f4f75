//! Game state machine.
//!
//! Per-slot states are Hidden, Selected and Matched; the board is either
//! accepting input or locked while a pair resolves.
//!
//! 1. `activate` turns a Hidden slot face-up. Anything else is ignored.
//! 2. The second pick locks the board and compares the two images.
//!    A match is kept immediately; a mismatch flips back after the settle
//!    delay.
//! 3. When every slot is matched, the win callback fires once after the
//!    presentation delay.

pub mod machine;
pub mod session;
pub mod state;
pub mod view;

pub use machine::{Activation, Game, GameBuilder};
pub use session::Session;
pub use state::{BoardState, IgnoreReason, Mode, SlotState};
pub use view::{BoardView, CellView, VisualState};
