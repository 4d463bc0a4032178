//! Fixed rules of 3x3 tic-tac-toe.

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Number of participants bound to a full game.
pub const PLAYERS: usize = 2;

/// Rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
