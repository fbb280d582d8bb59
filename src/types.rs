use std::fmt;

use serde::Serialize;

/// Winner code for a drawn game.
pub const DRAW: u8 = 0;

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire encoding used in board snapshots: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

/// A side. The human always plays Black, the computer White.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Wire encoding: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Computer strength. `Hard` enables the corner bonus, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn parse(s: &str) -> Result<Self, GameError> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Snapshot of the game returned across the WASM boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells in row-major order, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the opposing side had no legal move and was
    ///   skipped while advancing the turn after the last move.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Squares (0..=63) flipped by the last move, in ascending square
    /// order. Empty before the first move.
    pub flipped: Vec<u8>,
    /// Square the last stone was placed on, if any.
    pub last_move: Option<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 1=black, 2=white, 0=draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

/// Outcome of a computer move, including how long selection took so
/// the UI can fold it into its pre-move delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiMove {
    pub row: u8,
    pub col: u8,
    pub think_ms: u32,
    pub state: GameState,
}

/// Everything that can go wrong while driving a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    OutOfRange { row: u8, col: u8 },
    GameOver,
    NotYourTurn,
    IllegalMove,
    NoLegalMoves,
    UnknownDifficulty(String),
    NoActiveGame,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfRange { row, col } => {
                write!(f, "coordinate ({row}, {col}) is off the board")
            }
            GameError::GameOver => write!(f, "game is already over"),
            GameError::NotYourTurn => write!(f, "it is not that player's turn"),
            GameError::IllegalMove => write!(f, "illegal move"),
            GameError::NoLegalMoves => write!(f, "no legal moves available"),
            GameError::UnknownDifficulty(s) => {
                write!(f, "unknown difficulty {s:?} (expected \"easy\" or \"hard\")")
            }
            GameError::NoActiveGame => write!(f, "no game in progress"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_known_levels() {
        assert_eq!(Difficulty::parse("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::parse("hard").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn difficulty_rejects_unknown_level() {
        let err = Difficulty::parse("nightmare").unwrap_err();
        assert!(matches!(err, GameError::UnknownDifficulty(_)));
        assert!(err.to_string().contains("nightmare"));
    }

    #[test]
    fn player_codes_match_cell_codes() {
        assert_eq!(Player::Black.cell().code(), Player::Black.code());
        assert_eq!(Player::White.cell().code(), Player::White.code());
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }
}
