//! A game driven by its own virtual clock.

use std::rc::Rc;
use std::time::Duration;

use super::machine::{Activation, Game, GameBuilder};
use crate::board::SlotIndex;
use crate::core::ConfigError;
use crate::timer::{ManualClock, Scheduler, TimerKind};

/// Owns a `Game` and the `ManualClock` its delays are scheduled on.
///
/// The host feeds activations and elapsed time; `advance` delivers every
/// timer that came due.
///
/// ```
/// use std::time::Duration;
/// use heart_pairs::board::{BoardLayout, SlotIndex};
/// use heart_pairs::cards::{ImageId, ImageManifest};
/// use heart_pairs::core::GameConfig;
/// use heart_pairs::game::{GameBuilder, Session};
///
/// let layout = BoardLayout::from_rows(vec![vec![Some(0), Some(1)]]).unwrap();
/// let config = GameConfig::new(ImageManifest::new(["x"]), layout);
/// let mut session = Session::start(GameBuilder::new(config).seed(1)).unwrap();
///
/// session.activate(SlotIndex::new(0));
/// session.activate(SlotIndex::new(1));
/// assert!(session.game().is_won());
///
/// session.advance(Duration::from_millis(500));
/// assert!(session.game().has_signalled_win());
/// ```
#[derive(Debug)]
pub struct Session {
    game: Game,
    clock: Rc<ManualClock>,
}

impl Session {
    /// Build a game on a fresh clock.
    pub fn start(builder: GameBuilder) -> Result<Self, ConfigError> {
        let clock = Rc::new(ManualClock::new());
        let scheduler: Rc<dyn Scheduler> = clock.clone();
        let game = builder.build(scheduler)?;
        Ok(Self { game, clock })
    }

    /// The game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The clock driving the game's delays.
    #[must_use]
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Activate a slot.
    pub fn activate(&mut self, slot: SlotIndex) -> Activation {
        self.game.activate(slot)
    }

    /// Activate the slot at a grid position.
    pub fn activate_cell(&mut self, row: usize, col: usize) -> Activation {
        self.game.activate_cell(row, col)
    }

    /// Let time pass and resolve every delay that came due.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerKind> {
        self.clock
            .advance(by)
            .into_iter()
            .filter_map(|id| self.game.fire_timer(id))
            .collect()
    }
}
