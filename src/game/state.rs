//! Per-slot status and board-wide input mode.
//!
//! `BoardState` owns the bookkeeping that must stay consistent no matter
//! what the host does:
//! - at most two slots are Selected
//! - Selected and Matched slots are disjoint
//! - Matched only grows
//!
//! It knows nothing about images or timers; `Game` decides when a pair
//! matches and when a mismatch settles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::SlotIndex;

/// Status of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotState {
    /// Face-down.
    Hidden,
    /// Face-up as part of the current turn.
    Selected,
    /// Face-up for the rest of the game.
    Matched,
}

/// Whether activations are currently accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Accepting,
    /// A pair is being resolved; activations are dropped.
    Locked,
}

/// Why an activation was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A pair is being resolved.
    Locked,
    /// The slot is already face-up this turn. Picks cannot be undone.
    AlreadySelected,
    /// The slot was matched earlier.
    AlreadyMatched,
    /// No such slot on this board.
    UnknownSlot,
    /// The grid cell is a spacer.
    EmptyCell,
}

/// Selection and match bookkeeping for one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    slots: Vec<SlotState>,
    /// Current picks in the order they were made.
    selection: SmallVec<[SlotIndex; 2]>,
    matched: usize,
    mode: Mode,
}

impl BoardState {
    /// All slots Hidden, accepting input.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![SlotState::Hidden; slot_count],
            selection: SmallVec::new(),
            matched: 0,
            mode: Mode::Accepting,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Status of a slot.
    #[must_use]
    pub fn slot_state(&self, slot: SlotIndex) -> Option<SlotState> {
        self.slots.get(slot.index()).copied()
    }

    /// Current picks, first pick first.
    #[must_use]
    pub fn selection(&self) -> &[SlotIndex] {
        &self.selection
    }

    /// Number of matched slots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched
    }

    /// Matched slots in slot order.
    pub fn matched_slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, &state)| state == SlotState::Matched)
            .map(|(i, _)| SlotIndex::new(i as u16))
    }

    /// Input mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if every slot is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.matched == self.slots.len()
    }

    /// Turn a Hidden slot face-up.
    ///
    /// Returns the selection size after the pick. Locks the board when the
    /// second pick is made.
    pub fn select(&mut self, slot: SlotIndex) -> Result<usize, IgnoreReason> {
        if self.mode == Mode::Locked {
            return Err(IgnoreReason::Locked);
        }

        match self.slots.get(slot.index()) {
            None => return Err(IgnoreReason::UnknownSlot),
            Some(SlotState::Selected) => return Err(IgnoreReason::AlreadySelected),
            Some(SlotState::Matched) => return Err(IgnoreReason::AlreadyMatched),
            Some(SlotState::Hidden) => {}
        }

        self.slots[slot.index()] = SlotState::Selected;
        self.selection.push(slot);

        if self.selection.len() == 2 {
            self.mode = Mode::Locked;
        }

        Ok(self.selection.len())
    }

    /// The two picks of a complete turn, in order.
    #[must_use]
    pub fn pair(&self) -> Option<(SlotIndex, SlotIndex)> {
        match self.selection.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Keep the current pair face-up for good and unlock.
    pub fn resolve_match(&mut self) -> Option<(SlotIndex, SlotIndex)> {
        let (first, second) = self.pair()?;
        self.settle_selection(SlotState::Matched);
        self.matched += 2;
        Some((first, second))
    }

    /// Flip the current pair back over and unlock.
    pub fn resolve_mismatch(&mut self) -> Option<(SlotIndex, SlotIndex)> {
        let (first, second) = self.pair()?;
        self.settle_selection(SlotState::Hidden);
        Some((first, second))
    }

    fn settle_selection(&mut self, to: SlotState) {
        for slot in self.selection.drain(..) {
            self.slots[slot.index()] = to;
        }
        self.mode = Mode::Accepting;
    }
}
