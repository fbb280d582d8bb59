use std::sync::Mutex;

use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::board::BOARD_SIZE;
use crate::game::GameInstance;
use crate::types::{AiMove, Difficulty, GameError};

// Single-session engine: one current game behind a lazy mutex. The
// browser event loop is single-threaded; the mutex exists to satisfy
// the Sync requirement on statics, not for real contention.
static GAME: Lazy<Mutex<Option<GameInstance>>> = Lazy::new(|| Mutex::new(None));

fn with_game<T>(f: impl FnOnce(&mut GameInstance) -> Result<T, GameError>) -> Result<T, JsValue> {
    let mut slot = GAME.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let game = slot.as_mut().ok_or(GameError::NoActiveGame).map_err(to_js)?;
    f(game).map_err(to_js)
}

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Load probe for the JS side.
#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Starts a fresh game at the given difficulty ("easy" or "hard") and
/// returns the initial snapshot.
#[wasm_bindgen]
pub fn new_game(difficulty: &str) -> Result<JsValue, JsValue> {
    let difficulty = Difficulty::parse(difficulty).map_err(to_js)?;
    let game = GameInstance::with_greedy_selector(difficulty);
    let state = game.to_game_state();

    let mut slot = GAME.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(game);

    serialize(&state)
}

/// Human (Black) move; returns the post-move snapshot. The snapshot's
/// `flipped` list is the animation schedule, in ascending square
/// order, and `is_pass` reports a skipped White turn.
#[wasm_bindgen]
pub fn player_move(row: u8, col: u8) -> Result<JsValue, JsValue> {
    let state = with_game(|game| {
        game.place(row, col)?;
        Ok(game.to_game_state())
    })?;
    serialize(&state)
}

/// Computer (White) move. `think_ms` is wall-clock selection time so
/// the UI can fold it into its pre-move delay.
#[wasm_bindgen]
pub fn ai_move() -> Result<JsValue, JsValue> {
    let outcome = with_game(|game| {
        let started = Instant::now();
        let selected = game.do_ai_move()?;
        let think_ms = started.elapsed().as_millis() as u32;
        Ok(AiMove {
            row: (selected / BOARD_SIZE) as u8,
            col: (selected % BOARD_SIZE) as u8,
            think_ms,
            state: game.to_game_state(),
        })
    })?;
    serialize(&outcome)
}

/// Legal squares for the side to move, for the hint overlay. Empty
/// when the game is over.
#[wasm_bindgen]
pub fn legal_moves() -> Result<JsValue, JsValue> {
    let moves = with_game(|game| Ok(game.legal_moves_for_current()))?;
    serialize(&moves)
}

/// Final scoring. Winner code: 1=black, 2=white, 0=draw.
#[wasm_bindgen]
pub fn game_result() -> Result<JsValue, JsValue> {
    let result = with_game(|game| Ok(game.to_game_result()))?;
    serialize(&result)
}

/// Changes the computer strength for subsequent moves.
#[wasm_bindgen]
pub fn set_difficulty(difficulty: &str) -> Result<(), JsValue> {
    let difficulty = Difficulty::parse(difficulty).map_err(to_js)?;
    with_game(|game| {
        game.set_difficulty(difficulty);
        Ok(())
    })
}

/// Restarts the current game in place, keeping its difficulty.
#[wasm_bindgen]
pub fn reset_game() -> Result<JsValue, JsValue> {
    let state = with_game(|game| {
        game.reset();
        Ok(game.to_game_state())
    })?;
    serialize(&state)
}
