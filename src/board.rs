use crate::types::{Cell, GameError, Player};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

// E, W, S, N, SE, SW, NE, NW. Final flip masks do not depend on this
// order; reported flip lists are ascending square order regardless.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Board state represented by two bitboards, square `pos = row * 8 + col`
/// counted row-major from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the standard opening:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw bitboards. Overlapping masks are a
    /// programming error; the black mask wins on overlap.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Reads one square. Out-of-range coordinates are an error.
    pub fn cell(&self, row: u8, col: u8) -> Result<Cell, GameError> {
        let pos = square_index(row, col)?;
        let mask = bit(pos);
        Ok(if (self.black & mask) != 0 {
            Cell::Black
        } else if (self.white & mask) != 0 {
            Cell::White
        } else {
            Cell::Empty
        })
    }

    /// Writes one square without any rule validation (trusted caller;
    /// used for test setups and scenario construction).
    pub fn set_cell(&mut self, row: u8, col: u8, cell: Cell) -> Result<(), GameError> {
        let mask = bit(square_index(row, col)?);
        self.black &= !mask;
        self.white &= !mask;
        match cell {
            Cell::Black => self.black |= mask,
            Cell::White => self.white |= mask,
            Cell::Empty => {}
        }
        Ok(())
    }

    /// Returns the legal move mask for the given side.
    pub fn legal_moves(&self, player: Player) -> u64 {
        let mut legal = 0u64;
        for pos in 0..NUM_SQUARES {
            if self.flips_for(pos, player) != 0 {
                legal |= bit(pos);
            }
        }
        legal
    }

    /// Mask of stones captured by `player` placing on `pos`.
    ///
    /// Pure directional scan: contiguous opposing stones terminated by
    /// an own stone are captured; runs ended by an edge or an empty
    /// square are discarded. Returns 0 for an occupied or out-of-range
    /// target, so a zero result means the move is illegal.
    pub fn flips_for(&self, pos: usize, player: Player) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let (me, opp) = self.sides(player);
        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let row = (pos / BOARD_SIZE) as i32;
        let col = (pos % BOARD_SIZE) as i32;
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut run = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    run |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= run;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        flips
    }

    /// Places one stone for `player` and flips captured stones.
    /// Returns the flipped mask; 0 means the move was illegal and the
    /// board is unchanged.
    pub fn place(&mut self, pos: usize, player: Player) -> u64 {
        let flips = self.flips_for(pos, player);
        if flips == 0 {
            return 0;
        }

        let (me, opp) = self.sides(player);
        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts the board to `[u8; 64]` with 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (pos, cell) in cells.iter_mut().enumerate() {
            let mask = bit(pos);
            *cell = if (self.black & mask) != 0 {
                Cell::Black.code()
            } else if (self.white & mask) != 0 {
                Cell::White.code()
            } else {
                Cell::Empty.code()
            };
        }
        cells
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn square_index(row: u8, col: u8) -> Result<usize, GameError> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(GameError::OutOfRange { row, col });
    }
    Ok(row as usize * BOARD_SIZE + col as usize)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
