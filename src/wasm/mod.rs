//! Browser bindings.
//!
//! The page owns rendering and animation; this module owns the game. The
//! page drives time from its animation loop:
//!
//! ```js
//! import init, { PairGame } from "./pkg/heart_pairs.js";
//!
//! await init();
//! const game = new PairGame();
//! let last = performance.now();
//!
//! function frame(now) {
//!     if (game.tick(now - last)) showProposal();
//!     last = now;
//!     render(game.view());
//!     requestAnimationFrame(frame);
//! }
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::prelude::*;

use crate::board::SlotIndex;
use crate::cards::ImageId;
use crate::core::{GameConfig, GameRng};
use crate::game::{GameBuilder, Session};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// One game, exposed to JavaScript.
#[wasm_bindgen]
pub struct PairGame {
    session: Session,
    /// Set by the win callback, drained by `tick`.
    win_signal: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl PairGame {
    /// Start the reference game. Pass a seed for a reproducible shuffle.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<PairGame, JsError> {
        Self::start(GameConfig::reference(), seed)
    }

    /// Start a game from a JSON-shaped config object
    /// (`{ manifest, layout, timing? }`).
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue, seed: Option<u64>) -> Result<PairGame, JsError> {
        let config: GameConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("invalid config: {e}")))?;
        Self::start(config, seed)
    }

    fn start(config: GameConfig, seed: Option<u64>) -> Result<PairGame, JsError> {
        let win_signal = Rc::new(Cell::new(false));
        let signal = Rc::clone(&win_signal);

        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let builder = GameBuilder::new(config)
            .rng(rng)
            .on_game_won(move || signal.set(true));

        let session = Session::start(builder).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(PairGame {
            session,
            win_signal,
        })
    }

    /// Activate a slot. Returns false if the activation was ignored.
    pub fn activate(&mut self, slot: u16) -> bool {
        !self.session.activate(SlotIndex::new(slot)).is_ignored()
    }

    /// Activate the card at a grid position. Returns false if ignored.
    #[wasm_bindgen(js_name = activateCell)]
    pub fn activate_cell(&mut self, row: usize, col: usize) -> bool {
        !self.session.activate_cell(row, col).is_ignored()
    }

    /// Advance time. Returns true exactly once: on the tick that delivers
    /// the win signal.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        let elapsed = Duration::try_from_secs_f64(elapsed_ms / 1000.0).unwrap_or_default();
        self.session.advance(elapsed);
        self.win_signal.replace(false)
    }

    /// Board snapshot: `{ rows, cols, cells, locked, complete }`.
    pub fn view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.game().view())
            .map_err(|e| JsError::new(&format!("view serialization failed: {e}")))
    }

    /// Asset path for an image id from `view()`.
    #[wasm_bindgen(js_name = imagePath)]
    pub fn image_path(&self, image: u16) -> Option<String> {
        self.session
            .game()
            .config()
            .manifest
            .path(ImageId::new(image))
            .map(str::to_owned)
    }

    /// Whether every pair has been found.
    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.session.game().is_won()
    }
}
