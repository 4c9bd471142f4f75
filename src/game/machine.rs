//! The turn protocol: select, compare, resolve, and signal the win.

use std::rc::Rc;

use crate::board::{Cell, SlotIndex};
use crate::cards::{Deck, ImageId};
use crate::core::{ConfigError, GameConfig, GameRng};
use crate::timer::{PendingTimer, Scheduler, TimerId, TimerKind};

use super::state::{BoardState, IgnoreReason, Mode, SlotState};
use super::view::{BoardView, CellView, VisualState};

/// Outcome of one activation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Dropped without changing anything.
    Ignored(IgnoreReason),
    /// First pick of a turn.
    Revealed(SlotIndex),
    /// Second pick matched the first; both stay face-up.
    Matched {
        first: SlotIndex,
        second: SlotIndex,
        /// This match completed the board.
        complete: bool,
    },
    /// Second pick differs; both flip back once the settle delay fires.
    Mismatched { first: SlotIndex, second: SlotIndex },
}

impl Activation {
    /// Check if the request changed any state.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Activation::Ignored(_))
    }
}

/// Progress of the one-shot win signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WinSignal {
    Pending,
    Scheduled,
    Fired,
}

type WinCallback = Box<dyn FnMut()>;

/// One game instance.
///
/// Dropping a `Game` cancels whichever delay is pending, so a discarded game
/// never mutates state or signals a win afterwards.
pub struct Game {
    config: GameConfig,
    deck: Deck,
    board: BoardState,
    scheduler: Rc<dyn Scheduler>,
    /// At most one delayed transition at a time.
    pending: Option<PendingTimer>,
    win: WinSignal,
    on_game_won: Option<WinCallback>,
}

/// Builder for creating a `Game`.
///
/// ```
/// use std::rc::Rc;
/// use heart_pairs::core::GameConfig;
/// use heart_pairs::game::GameBuilder;
/// use heart_pairs::timer::{ManualClock, Scheduler};
///
/// let scheduler: Rc<dyn Scheduler> = Rc::new(ManualClock::new());
/// let game = GameBuilder::new(GameConfig::reference())
///     .seed(42)
///     .build(scheduler)
///     .unwrap();
///
/// assert_eq!(game.deck().len(), 36);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    rng: Option<GameRng>,
    deck: Option<Vec<ImageId>>,
    on_game_won: Option<WinCallback>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: None,
            deck: None,
            on_game_won: None,
        }
    }

    /// Shuffle with a seeded RNG.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(GameRng::new(seed))
    }

    /// Shuffle with the given RNG. Defaults to `GameRng::from_entropy()`.
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Skip the shuffle and use this arrangement.
    pub fn deck(mut self, slots: Vec<ImageId>) -> Self {
        self.deck = Some(slots);
        self
    }

    /// Called once, after the win delay, when every pair has been found.
    pub fn on_game_won(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_game_won = Some(Box::new(callback));
        self
    }

    /// Validate the configuration and deal the deck.
    pub fn build(self, scheduler: Rc<dyn Scheduler>) -> Result<Game, ConfigError> {
        self.config.validate()?;

        let deck = match self.deck {
            Some(slots) => explicit_deck(&self.config, slots)?,
            None => {
                let mut rng = self.rng.unwrap_or_else(GameRng::from_entropy);
                let images: Vec<ImageId> = self.config.manifest.ids().collect();
                Deck::build(&images, &mut rng)
            }
        };

        log::info!(
            "new game: {} pairs on a {}x{} board",
            deck.pair_count(),
            self.config.layout.rows(),
            self.config.layout.cols()
        );

        Ok(Game {
            board: BoardState::new(deck.len()),
            config: self.config,
            deck,
            scheduler,
            pending: None,
            win: WinSignal::Pending,
            on_game_won: self.on_game_won,
        })
    }
}

fn explicit_deck(config: &GameConfig, slots: Vec<ImageId>) -> Result<Deck, ConfigError> {
    let expected = config.slot_count();
    if slots.len() != expected {
        return Err(ConfigError::DeckLength {
            expected,
            found: slots.len(),
        });
    }

    if let Some(&image) = slots.iter().find(|&&image| !config.manifest.contains(image)) {
        return Err(ConfigError::UnknownImage { image });
    }

    Deck::from_slots(slots)
}

impl Game {
    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The dealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Status of a slot.
    #[must_use]
    pub fn slot_state(&self, slot: SlotIndex) -> Option<SlotState> {
        self.board.slot_state(slot)
    }

    /// Current picks, first pick first.
    #[must_use]
    pub fn selection(&self) -> &[SlotIndex] {
        self.board.selection()
    }

    /// Matched slots in slot order.
    pub fn matched_slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.board.matched_slots()
    }

    /// Number of matched slots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.board.matched_count()
    }

    /// Input mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.board.mode()
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_complete()
    }

    /// Check if the win signal has been delivered.
    #[must_use]
    pub fn has_signalled_win(&self) -> bool {
        self.win == WinSignal::Fired
    }

    /// The delay currently pending, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<(TimerId, TimerKind)> {
        self.pending.as_ref().map(|timer| (timer.id(), timer.kind()))
    }

    /// Activate the slot at a grid position.
    pub fn activate_cell(&mut self, row: usize, col: usize) -> Activation {
        match self.config.layout.cell_at(row, col) {
            Cell::Card(slot) => self.activate(slot),
            Cell::Empty => {
                log::trace!("ignored activation of empty cell ({row}, {col})");
                Activation::Ignored(IgnoreReason::EmptyCell)
            }
        }
    }

    /// Activate a slot.
    ///
    /// Only a Hidden slot on an unlocked board is accepted; anything else is
    /// reported as `Activation::Ignored` and changes nothing.
    pub fn activate(&mut self, slot: SlotIndex) -> Activation {
        let picks = match self.board.select(slot) {
            Ok(picks) => picks,
            Err(reason) => {
                log::trace!("ignored activation of {slot}: {reason:?}");
                return Activation::Ignored(reason);
            }
        };

        if picks < 2 {
            log::debug!("revealed {slot}");
            return Activation::Revealed(slot);
        }

        let Some((first, second)) = self.board.pair() else {
            return Activation::Revealed(slot);
        };

        if self.deck.image_at(first) == self.deck.image_at(second) {
            self.board.resolve_match();
            let complete = self.board.is_complete();
            log::debug!(
                "matched {first} and {second} ({}/{} slots)",
                self.board.matched_count(),
                self.board.slot_count()
            );
            if complete {
                self.schedule_win();
            }
            Activation::Matched {
                first,
                second,
                complete,
            }
        } else {
            log::debug!("mismatched {first} and {second}, settling");
            let delay = self.config.timing.settle_delay();
            self.pending = Some(PendingTimer::start(&self.scheduler, TimerKind::Settle, delay));
            Activation::Mismatched { first, second }
        }
    }

    fn schedule_win(&mut self) {
        if self.win != WinSignal::Pending {
            return;
        }
        log::debug!("board complete, signalling win after {}ms", self.config.timing.win_delay_ms);
        let delay = self.config.timing.win_delay();
        self.pending = Some(PendingTimer::start(&self.scheduler, TimerKind::WinPresentation, delay));
        self.win = WinSignal::Scheduled;
    }

    /// Resolve a fired timer.
    ///
    /// Ids that do not match the pending timer (stale, cancelled, or from
    /// another game) are ignored. Returns what was resolved.
    pub fn fire_timer(&mut self, id: TimerId) -> Option<TimerKind> {
        if self.pending.as_ref().map(PendingTimer::id) != Some(id) {
            log::trace!("ignored stale {id}");
            return None;
        }
        let kind = self.pending.take()?.complete();

        match kind {
            TimerKind::Settle => {
                if let Some((first, second)) = self.board.resolve_mismatch() {
                    log::debug!("settled {first} and {second} face-down");
                }
            }
            TimerKind::WinPresentation => {
                if self.win == WinSignal::Scheduled {
                    self.win = WinSignal::Fired;
                    log::info!("game won");
                    if let Some(callback) = self.on_game_won.as_mut() {
                        callback();
                    }
                }
            }
        }

        Some(kind)
    }

    /// Render state for one slot.
    #[must_use]
    pub fn slot_view(&self, slot: SlotIndex) -> Option<CellView> {
        let image = self.deck.image_at(slot)?;
        let state = self.board.slot_state(slot)?;
        Some(CellView::Card {
            slot,
            image,
            visual: VisualState::from(state),
        })
    }

    /// Render state for every grid cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.config.layout.cells().map(move |(_, cell)| match cell {
            Cell::Card(slot) => self.slot_view(slot).unwrap_or(CellView::Empty),
            Cell::Empty => CellView::Empty,
        })
    }

    /// Snapshot of the whole board for the presentation layer.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            rows: self.config.layout.rows(),
            cols: self.config.layout.cols(),
            cells: self.cells().collect(),
            locked: self.mode() == Mode::Locked,
            complete: self.is_won(),
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("deck", &self.deck)
            .field("board", &self.board)
            .field("pending", &self.pending)
            .field("win", &self.win)
            .finish_non_exhaustive()
    }
}
