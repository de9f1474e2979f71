//! Connect 4 board rules.
//!
//! Connect 4 is a two-player connection game where players drop colored discs
//! into a 7-column, 6-row vertically suspended grid. The objective is to be
//! the first to form a horizontal, vertical, or diagonal line of four discs.
//!
//! # Board Layout
//!
//! The board is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Outcome, Player, State};
//!
//! let mut state = State::new();
//! state.apply_move(3).unwrap();
//! assert_eq!(state.to_move(), Player::Yellow);
//! assert_eq!(state.winner(), None);
//! ```

use std::fmt;

use thiserror::Error;

/// Default board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const BOARD_SIZE: usize = COLS * ROWS; // 42

/// Number of aligned discs needed to win.
pub const CONNECT: usize = 4;

/// Direction vectors: horizontal, vertical, diagonal /, diagonal \
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Rejected attempt to drop a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("column {column} has no free spots")]
    ColumnFull { column: u8 },

    #[error("column {column} is outside the board (0..{columns})")]
    OutOfRange { column: u8, columns: u8 },
}

/// Errors building a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unsupported board dimensions {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("replaying move {index}: {source}")]
    Replay {
        index: usize,
        #[source]
        source: IllegalMove,
    },
}

/// A disc color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The other color.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("Red"),
            Player::Yellow => f.write_str("Yellow"),
        }
    }
}

/// Contents of a single board cell: 0=empty, 1=Red, 2=Yellow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Red = 1,
    Yellow = 2,
}

impl Cell {
    /// The player owning this cell, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Tie => f.write_str("tie"),
        }
    }
}

/// Connect4 game state
///
/// Holds the grid and the player to move. The only mutator is
/// [`State::apply_move`]; exploring a continuation without disturbing the
/// original is done on a clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    columns: u8,
    rows: u8,
    /// Stored in row-major order with row 0 at the bottom
    board: Vec<Cell>,
    /// Number of pieces in each column
    column_heights: Vec<u8>,
    to_move: Player,
}

impl State {
    /// Create an empty 7x6 board with Red to move.
    pub fn new() -> Self {
        Self::empty(COLS as u8, ROWS as u8)
    }

    /// Create an empty board of the given size with Red to move.
    ///
    /// The board must be able to hold a line of four in at least one
    /// orientation. Both dimensions must fit in a `u8`, since moves are
    /// column indices of that type.
    pub fn with_dimensions(columns: usize, rows: usize) -> Result<Self, BoardError> {
        let fits_line = columns >= CONNECT || rows >= CONNECT;
        let max = u8::MAX as usize;
        if columns == 0 || rows == 0 || columns > max || rows > max || !fits_line {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        Ok(Self::empty(columns as u8, rows as u8))
    }

    fn empty(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            board: vec![Cell::Empty; columns as usize * rows as usize],
            column_heights: vec![0; columns as usize],
            to_move: Player::Red, // Red goes first
        }
    }

    /// Replay a sequence of columns on an empty default board.
    pub fn from_moves(moves: &[u8]) -> Result<Self, BoardError> {
        let mut state = Self::new();
        for (index, &column) in moves.iter().enumerate() {
            state
                .apply_move(column)
                .map_err(|source| BoardError::Replay { index, source })?;
        }
        Ok(state)
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns as usize
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// The player whose disc goes in next.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Convert column and row to board index
    #[inline]
    fn pos(&self, col: usize, row: usize) -> usize {
        row * self.columns as usize + col
    }

    /// Cell at (col, row), row 0 being the bottom.
    ///
    /// Panics if the coordinates are off the board.
    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.board[self.pos(col, row)]
    }

    /// Total number of discs on the board.
    pub fn moves_played(&self) -> usize {
        self.column_heights.iter().map(|&h| h as usize).sum()
    }

    /// Columns whose top row is still empty, in ascending order.
    ///
    /// This is the gravity rule only; a board that already has a winner
    /// still reports its open columns. See [`State::legal_moves`].
    pub fn available_moves(&self) -> Vec<u8> {
        (0..self.columns)
            .filter(|&col| self.column_heights[col as usize] < self.rows)
            .collect()
    }

    /// Moves that continue the game: the available columns while the game
    /// is undecided, nothing once it has a winner or is tied.
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.available_moves()
    }

    /// Drop the current player's piece in `column` and pass the turn.
    pub fn apply_move(&mut self, column: u8) -> Result<(), IllegalMove> {
        let col = column as usize;
        if column >= self.columns {
            return Err(IllegalMove::OutOfRange {
                column,
                columns: self.columns,
            });
        }
        let row = self.column_heights[col];
        if row >= self.rows {
            return Err(IllegalMove::ColumnFull { column });
        }

        let pos = self.pos(col, row as usize);
        self.board[pos] = self.to_move.into();
        self.column_heights[col] += 1;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Non-mutating variant of [`State::apply_move`].
    pub fn with_move(&self, column: u8) -> Result<State, IllegalMove> {
        let mut next = self.clone();
        next.apply_move(column)?;
        Ok(next)
    }

    /// Scan the whole board for a line of four.
    ///
    /// Every orientation is checked from every starting cell before falling
    /// back to the tie / ongoing distinction.
    pub fn winner(&self) -> Option<Outcome> {
        for row in 0..self.rows() {
            for col in 0..self.columns() {
                let Some(player) = self.cell(col, row).player() else {
                    continue;
                };
                for (dc, dr) in DIRECTIONS {
                    if self.line_from(col, row, dc, dr, player) {
                        return Some(Outcome::Winner(player));
                    }
                }
            }
        }

        // Check for draw (board full but no winner)
        if self.column_heights.iter().all(|&h| h >= self.rows) {
            return Some(Outcome::Tie);
        }

        None
    }

    /// Whether the game is over (win or tie).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// True when `CONNECT` cells starting at (col, row) along (dc, dr) all
    /// belong to `player`.
    fn line_from(&self, col: usize, row: usize, dc: i32, dr: i32, player: Player) -> bool {
        let target = Cell::from(player);
        (1..CONNECT as i32).all(|step| {
            let c = col as i32 + dc * step;
            let r = row as i32 + dr * step;
            c >= 0
                && c < self.columns as i32
                && r >= 0
                && r < self.rows as i32
                && self.cell(c as usize, r as usize) == target
        })
    }

    /// Get the row where the last piece was placed in a column
    pub fn last_row_in_column(&self, col: usize) -> Option<usize> {
        match self.column_heights.get(col) {
            None | Some(0) => None,
            Some(&h) => Some((h - 1) as usize),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the top row first: `.` empty, `R` red, `Y` yellow.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows()).rev() {
            for col in 0..self.columns() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = match self.cell(col, row) {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.to_move)
    }
}
