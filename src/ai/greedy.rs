use crate::ai::MoveSelector;
use crate::board::{BOARD_SIZE, Board, NUM_SQUARES};
use crate::types::{Difficulty, Player};

/// Score added to a corner square on `Difficulty::Hard`.
const CORNER_BONUS: u32 = 10;

/// One-ply greedy selector: maximize immediate flip count, with a
/// static corner bonus on hard. No look-ahead.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, player: Player, difficulty: Difficulty) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;

        // Row-major scan with a strict improvement test, so ties go to
        // the lexicographically smallest (row, col).
        for pos in 0..NUM_SQUARES {
            let flips = board.flips_for(pos, player).count_ones();
            if flips == 0 {
                continue;
            }

            let mut score = flips;
            if difficulty == Difficulty::Hard && is_corner(pos) {
                score += CORNER_BONUS;
            }

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        best.map(|(pos, _)| pos)
    }
}

fn is_corner(pos: usize) -> bool {
    let row = pos / BOARD_SIZE;
    let col = pos % BOARD_SIZE;
    (row == 0 || row == BOARD_SIZE - 1) && (col == 0 || col == BOARD_SIZE - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn idx(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::from_bitboards(0, 0);
        for &(r, c) in black {
            board.set_cell(r, c, Cell::Black).unwrap();
        }
        for &(r, c) in white {
            board.set_cell(r, c, Cell::White).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_yields_no_move() {
        let board = Board::from_bitboards(0, 0);
        let selected = GreedySelector.select_move(&board, Player::White, Difficulty::Easy);
        assert_eq!(selected, None);
    }

    #[test]
    fn easy_selects_highest_flip_count() {
        // White to move. Horizontal sandwiches only:
        // (0,0) captures 2, (3,0) captures 3, (5,0)/(6,0) capture 1,
        // plus diagonal 1-captures at (4,0) and (7,0).
        let board = board_with(
            &[(0, 1), (0, 2), (3, 1), (3, 2), (3, 3), (5, 1), (6, 1)],
            &[(0, 3), (3, 4), (5, 2), (6, 2)],
        );

        let selected = GreedySelector.select_move(&board, Player::White, Difficulty::Easy);

        assert_eq!(selected, Some(idx(3, 0)));
    }

    #[test]
    fn hard_corner_bonus_beats_larger_flip_count() {
        // Same board: the (0,0) corner captures only 2, but 2 + 10
        // outscores the 3-capture move at (3,0).
        let board = board_with(
            &[(0, 1), (0, 2), (3, 1), (3, 2), (3, 3), (5, 1), (6, 1)],
            &[(0, 3), (3, 4), (5, 2), (6, 2)],
        );

        assert_eq!(
            board.flips_for(idx(0, 0), Player::White).count_ones(),
            2,
            "corner capture is strictly smaller than the best plain move"
        );

        let selected = GreedySelector.select_move(&board, Player::White, Difficulty::Hard);

        assert_eq!(selected, Some(idx(0, 0)));
    }

    #[test]
    fn equal_scores_resolve_to_first_square_in_row_major_order() {
        // Two independent 1-capture moves at (1,0) and (3,0).
        let board = board_with(&[(1, 1), (3, 1)], &[(1, 2), (3, 2)]);

        let selected = GreedySelector.select_move(&board, Player::White, Difficulty::Easy);

        assert_eq!(selected, Some(idx(1, 0)));
    }

    #[test]
    fn selector_never_mutates_the_board() {
        let board = Board::new();
        let before = board;

        GreedySelector.select_move(&board, Player::White, Difficulty::Hard);

        assert_eq!(board, before);
    }
}
