//! Configuration loading and fail-fast validation.

use std::rc::Rc;

use heart_pairs::board::{BoardLayout, Cell, SlotIndex};
use heart_pairs::core::{ConfigError, GameConfig};
use heart_pairs::game::{CellView, GameBuilder, VisualState};
use heart_pairs::timer::{ManualClock, Scheduler};
use proptest::prelude::*;

fn scheduler() -> Rc<dyn Scheduler> {
    Rc::new(ManualClock::new())
}

/// A game starts from a JSON config.
#[test]
fn test_game_from_json() {
    let json = r#"{
        "manifest": ["cat.png", "dog.png"],
        "layout": [[null, 0, 1, null], [2, null, null, 3]],
        "timing": { "settle_delay_ms": 750, "win_delay_ms": 250 }
    }"#;

    let config: GameConfig = serde_json::from_str(json).unwrap();
    let game = GameBuilder::new(config).seed(11).build(scheduler()).unwrap();

    assert_eq!(game.deck().len(), 4);
    assert_eq!(game.config().timing.settle_delay_ms, 750);

    let cells: Vec<CellView> = game.cells().collect();
    assert_eq!(cells.len(), 8);
    assert_eq!(cells[0], CellView::Empty);
    assert!(matches!(
        cells[4],
        CellView::Card {
            slot: SlotIndex(2),
            visual: VisualState::Hidden,
            ..
        }
    ));
}

/// A layout with duplicate slots is rejected while parsing.
#[test]
fn test_json_layout_is_validated() {
    let json = r#"{ "manifest": ["a"], "layout": [[0, 0]] }"#;
    let err = serde_json::from_str::<GameConfig>(json).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

/// Config round-trips through JSON unchanged.
#[test]
fn test_reference_config_round_trip() {
    let config = GameConfig::reference();
    let json = serde_json::to_string(&config).unwrap();
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

/// Every configuration failure stops the game from being built.
#[test]
fn test_build_fails_fast() {
    let json = r#"{ "manifest": ["a", "b"], "layout": [[0, 1, 2]] }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let err = GameBuilder::new(config).build(scheduler()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::SizeMismatch {
            slots: 3,
            images: 2,
            expected: 4
        }
    );

    let json = r#"{ "manifest": ["a", "a"], "layout": [[0, 1, 2, 3]] }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let err = GameBuilder::new(config).build(scheduler()).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateImage { .. }));

    let json = r#"{ "manifest": [], "layout": [[null]] }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let err = GameBuilder::new(config).build(scheduler()).unwrap_err();
    assert_eq!(err, ConfigError::NoImages);
}

proptest! {
    /// Any permutation of slots scattered over a grid is a valid layout,
    /// and `position_of` inverts `cell_at`.
    #[test]
    fn prop_scattered_layouts_are_bijections(
        (cols, cells) in (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
            let total = rows * cols;
            (Just(cols), proptest::collection::vec(any::<bool>(), total))
        }),
        shuffle_seed in any::<u64>(),
    ) {
        let playable = cells.iter().filter(|&&c| c).count();
        let mut order: Vec<u16> = (0..playable as u16).collect();
        let mut rng = heart_pairs::core::GameRng::new(shuffle_seed);
        for i in (1..order.len()).rev() {
            let j = rng.index_through(i);
            order.swap(i, j);
        }

        let mut next = order.into_iter();
        let rows: Vec<Vec<Option<u16>>> = cells
            .chunks(cols)
            .map(|row| row.iter().map(|&c| if c { next.next() } else { None }).collect())
            .collect();

        let layout = BoardLayout::from_rows(rows).unwrap();
        prop_assert_eq!(layout.slot_count(), playable);

        for slot in 0..playable as u16 {
            let slot = SlotIndex::new(slot);
            let (row, col) = layout.position_of(slot).unwrap();
            prop_assert_eq!(layout.cell_at(row, col), Cell::Card(slot));
        }
    }

    /// Dropping any one slot from the heart leaves a gap that is reported.
    #[test]
    fn prop_missing_slot_detected(missing in 0u16..35) {
        let heart: Vec<Vec<Option<u16>>> = BoardLayout::heart().into();
        let rows: Vec<Vec<Option<u16>>> = heart
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.filter(|&s| s != missing)).collect())
            .collect();

        let err = BoardLayout::from_rows(rows).unwrap_err();
        prop_assert_eq!(err, ConfigError::MissingSlot { slot: missing, slot_count: 35 });
    }
}
