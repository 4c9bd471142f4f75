//! Grid-to-slot mapping that gives the board its silhouette.
//!
//! A layout is a rectangular grid where each cell either holds a card slot
//! or is an empty spacer. The playable cells must cover `[0, slot_count)`
//! exactly once, so every slot has one place on screen regardless of how the
//! deck was shuffled.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Logical card position, independent of where it sits on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotIndex(pub u16);

impl SlotIndex {
    /// Create a new slot index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The index as a `usize`, for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Spacer; never rendered as a card and never interactive.
    Empty,
    /// Playable cell holding a slot.
    Card(SlotIndex),
}

impl Cell {
    /// The slot in this cell, if any.
    #[must_use]
    pub fn slot(self) -> Option<SlotIndex> {
        match self {
            Cell::Card(slot) => Some(slot),
            Cell::Empty => None,
        }
    }
}

const X: i16 = -1;

/// The reference heart: 7 rows x 9 columns, 36 slots.
const HEART: [[i16; 9]; 7] = [
    [X, X, 0, 1, X, 2, 3, X, X],
    [X, 4, 5, 6, 7, 8, 9, 10, X],
    [11, 12, 13, 14, 15, 16, 17, 18, 19],
    [X, 20, 21, 22, 23, 24, 25, 26, X],
    [X, X, 27, 28, 29, 30, 31, X, X],
    [X, X, X, 32, 33, 34, X, X, X],
    [X, X, X, X, 35, X, X, X, X],
];

/// Validated grid layout.
///
/// Deserialises from a list of rows (`null` for empty cells) and runs the
/// same validation as `from_rows`.
///
/// ## Example
///
/// ```
/// use heart_pairs::board::{BoardLayout, Cell, SlotIndex};
///
/// let layout = BoardLayout::from_rows(vec![
///     vec![Some(0), None],
///     vec![Some(2), Some(1)],
/// ]).unwrap();
///
/// assert_eq!(layout.slot_count(), 3);
/// assert_eq!(layout.cell_at(1, 0), Cell::Card(SlotIndex::new(2)));
/// assert_eq!(layout.cell_at(0, 1), Cell::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<u16>>>", into = "Vec<Vec<Option<u16>>>")]
pub struct BoardLayout {
    rows: usize,
    cols: usize,
    /// Row-major cells.
    cells: Vec<Cell>,
    /// Grid position of each slot, indexed by slot.
    positions: Vec<(usize, usize)>,
}

impl BoardLayout {
    /// The reference heart-shaped layout.
    #[must_use]
    pub fn heart() -> Self {
        let rows = HEART
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| u16::try_from(cell).ok())
                    .collect()
            })
            .collect();

        Self::from_rows(rows).expect("heart layout covers slots 0..36 exactly once")
    }

    /// Build and validate a layout from rows of optional slot indices.
    ///
    /// The grid must be non-empty and rectangular, and the playable cells
    /// must hold each index in `[0, playable_cells)` exactly once.
    pub fn from_rows(rows: Vec<Vec<Option<u16>>>) -> Result<Self, ConfigError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(ConfigError::EmptyLayout);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(ConfigError::RaggedLayout {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for slot in rows.iter().flatten() {
            match slot {
                Some(slot) => {
                    if !seen.insert(*slot) {
                        return Err(ConfigError::DuplicateSlot { slot: *slot });
                    }
                    cells.push(Cell::Card(SlotIndex::new(*slot)));
                }
                None => cells.push(Cell::Empty),
            }
        }

        let slot_count = seen.len();
        let mut positions = vec![(0, 0); slot_count];
        for (i, cell) in cells.iter().enumerate() {
            if let Cell::Card(slot) = cell {
                match positions.get_mut(slot.index()) {
                    Some(position) => *position = (i / cols, i % cols),
                    // Distinct indices beyond the range imply a gap below it.
                    None => {
                        let missing = (0..slot_count as u16)
                            .find(|s| !seen.contains(s))
                            .unwrap_or(slot.raw());
                        return Err(ConfigError::MissingSlot {
                            slot: missing,
                            slot_count,
                        });
                    }
                }
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
            positions,
        })
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of playable cells (2N for a paired board).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.positions.len()
    }

    /// Cell at a grid position. Positions outside the grid are `Empty`.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return Cell::Empty;
        }
        self.cells[row * self.cols + col]
    }

    /// Grid position of a slot.
    #[must_use]
    pub fn position_of(&self, slot: SlotIndex) -> Option<(usize, usize)> {
        self.positions.get(slot.index()).copied()
    }

    /// All cells in row-major order with their positions.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols, i % cols), cell))
    }
}

impl TryFrom<Vec<Vec<Option<u16>>>> for BoardLayout {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<Option<u16>>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<BoardLayout> for Vec<Vec<Option<u16>>> {
    fn from(layout: BoardLayout) -> Self {
        layout
            .cells
            .chunks(layout.cols)
            .map(|row| row.iter().map(|cell| cell.slot().map(SlotIndex::raw)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_dimensions() {
        let layout = BoardLayout::heart();
        assert_eq!(layout.rows(), 7);
        assert_eq!(layout.cols(), 9);
        assert_eq!(layout.slot_count(), 36);
    }

    #[test]
    fn test_heart_cells() {
        let layout = BoardLayout::heart();
        assert_eq!(layout.cell_at(0, 0), Cell::Empty);
        assert_eq!(layout.cell_at(0, 2), Cell::Card(SlotIndex::new(0)));
        assert_eq!(layout.cell_at(0, 4), Cell::Empty);
        assert_eq!(layout.cell_at(2, 0), Cell::Card(SlotIndex::new(11)));
        assert_eq!(layout.cell_at(6, 4), Cell::Card(SlotIndex::new(35)));
    }

    #[test]
    fn test_out_of_grid_is_empty() {
        let layout = BoardLayout::heart();
        assert_eq!(layout.cell_at(7, 0), Cell::Empty);
        assert_eq!(layout.cell_at(0, 9), Cell::Empty);
    }

    #[test]
    fn test_position_of_inverts_cell_at() {
        let layout = BoardLayout::heart();
        for slot in 0..36 {
            let slot = SlotIndex::new(slot);
            let (row, col) = layout.position_of(slot).unwrap();
            assert_eq!(layout.cell_at(row, col), Cell::Card(slot));
        }
        assert_eq!(layout.position_of(SlotIndex::new(36)), None);
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert_eq!(BoardLayout::from_rows(vec![]), Err(ConfigError::EmptyLayout));
        assert_eq!(BoardLayout::from_rows(vec![vec![]]), Err(ConfigError::EmptyLayout));
    }

    #[test]
    fn test_ragged_layout_rejected() {
        let result = BoardLayout::from_rows(vec![vec![Some(0), Some(1)], vec![None]]);
        assert_eq!(
            result,
            Err(ConfigError::RaggedLayout {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let result = BoardLayout::from_rows(vec![vec![Some(0), Some(1), Some(0)]]);
        assert_eq!(result, Err(ConfigError::DuplicateSlot { slot: 0 }));
    }

    #[test]
    fn test_gap_rejected() {
        let result = BoardLayout::from_rows(vec![vec![Some(0), Some(2), None]]);
        assert_eq!(
            result,
            Err(ConfigError::MissingSlot {
                slot: 1,
                slot_count: 2
            })
        );
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let json = "[[0,null],[null,1]]";
        let layout: BoardLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.slot_count(), 2);
        assert_eq!(serde_json::to_string(&layout).unwrap(), json);

        let bad: Result<BoardLayout, _> = serde_json::from_str("[[0,0]]");
        assert!(bad.is_err());
    }
}
