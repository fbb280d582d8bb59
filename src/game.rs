use crate::ai::{GreedySelector, MoveSelector};
use crate::board::{BOARD_SIZE, Board, NUM_SQUARES};
use crate::types::{DRAW, Difficulty, GameError, GameResult, GameState, Player, Position};

/// One game of Othello: the human plays Black, the selector plays
/// White. All rule violations surface as `Err` values; the caller
/// decides whether to swallow them.
pub struct GameInstance {
    board: Board,
    current_player: Player,
    difficulty: Difficulty,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<u8>,
    last_move: Option<u8>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(difficulty: Difficulty, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            difficulty,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            last_move: None,
            selector,
        }
    }

    pub fn with_greedy_selector(difficulty: Difficulty) -> Self {
        Self::new(difficulty, Box::new(GreedySelector))
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The original UI reads the level selector before every computer
    /// move, so difficulty stays adjustable mid-game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Human (Black) move.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != Player::Black {
            return Err(GameError::NotYourTurn);
        }

        let pos = row_col_to_pos(row, col)?;
        self.apply_move(pos, Player::Black)
    }

    /// Computer (White) move. Returns the chosen square.
    pub fn do_ai_move(&mut self) -> Result<usize, GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != Player::White {
            return Err(GameError::NotYourTurn);
        }

        let legal = self.board.legal_moves(Player::White);
        if legal == 0 {
            // Unreachable through normal play: turn advancement never
            // leaves a moveless side on the clock.
            return Err(GameError::NoLegalMoves);
        }

        let selected = self
            .selector
            .select_move(&self.board, Player::White, self.difficulty)
            .ok_or(GameError::NoLegalMoves)?;

        if selected >= NUM_SQUARES || (legal & (1u64 << selected)) == 0 {
            return Err(GameError::IllegalMove);
        }

        self.apply_move(selected, Player::White)?;
        Ok(selected)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.legal_moves(self.current_player) != 0
    }

    /// Hint overlay data: legal squares for the side to move. Empty
    /// once the game is over.
    pub fn legal_moves_for_current(&self) -> Vec<Position> {
        if self.is_game_over {
            return Vec::new();
        }
        let legal = self.board.legal_moves(self.current_player);
        bitmask_to_indices(legal)
            .into_iter()
            .map(|idx| Position {
                row: idx / BOARD_SIZE as u8,
                col: idx % BOARD_SIZE as u8,
            })
            .collect()
    }

    /// Reseeds the board for a fresh game; difficulty and selector
    /// survive the reset.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.last_move = None;
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            last_move: self.last_move,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                Player::Black.code()
            } else if white_count > black_count {
                Player::White.code()
            } else {
                DRAW
            },
            black_count,
            white_count,
        }
    }

    fn apply_move(&mut self, pos: usize, player: Player) -> Result<(), GameError> {
        let flips = self.board.place(pos, player);
        if flips == 0 {
            return Err(GameError::IllegalMove);
        }

        self.flipped = bitmask_to_indices(flips);
        self.last_move = Some(pos as u8);
        self.advance_turn(player);
        Ok(())
    }

    // Switch to the opponent; a moveless opponent is skipped, and if
    // the mover is then also moveless the game is over. Two passes in
    // a row always mean neither side can move.
    fn advance_turn(&mut self, mover: Player) {
        let opponent = mover.opponent();
        self.is_pass = false;
        self.current_player = opponent;

        if self.board.legal_moves(opponent) == 0 {
            if self.board.legal_moves(mover) == 0 {
                self.is_game_over = true;
            } else {
                self.current_player = mover;
                self.is_pass = true;
            }
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.last_move = None;
    }
}

fn row_col_to_pos(row: u8, col: u8) -> Result<usize, GameError> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(GameError::OutOfRange { row, col });
    }
    Ok(row as usize * BOARD_SIZE + col as usize)
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        out.push(bits.trailing_zeros() as u8);
        bits &= bits - 1;
    }

    out
}
