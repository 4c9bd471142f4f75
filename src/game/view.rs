//! Render-ready board state for the presentation layer.
//!
//! The presentation layer flips cards based on `VisualState` alone; it needs
//! no game logic of its own.

use serde::{Deserialize, Serialize};

use super::state::SlotState;
use crate::board::SlotIndex;
use crate::cards::ImageId;

/// How a card should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    Hidden,
    /// Face-up as part of the current turn.
    FaceUp,
    Matched,
}

impl From<SlotState> for VisualState {
    fn from(state: SlotState) -> Self {
        match state {
            SlotState::Hidden => VisualState::Hidden,
            SlotState::Selected => VisualState::FaceUp,
            SlotState::Matched => VisualState::Matched,
        }
    }
}

impl VisualState {
    /// Whether the picture side is showing.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, VisualState::Hidden)
    }
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellView {
    /// Spacer.
    Empty,
    Card {
        slot: SlotIndex,
        image: ImageId,
        visual: VisualState,
    },
}

/// Whole board, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<CellView>,
    /// Input is currently dropped.
    pub locked: bool,
    /// Every slot is matched.
    pub complete: bool,
}

impl BoardView {
    /// Cell at a grid position.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }
}
