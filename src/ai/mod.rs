mod greedy;

pub use greedy::GreedySelector;

use crate::board::Board;
use crate::types::{Difficulty, Player};

/// Strategy seam for the computer player. Implementations get a read
/// only view of the board and return a square index, or `None` when
/// the side to move has no legal move (a pass).
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, player: Player, difficulty: Difficulty) -> Option<usize>;
}
