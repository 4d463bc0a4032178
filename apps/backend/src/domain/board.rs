use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{CELLS, WIN_LINES};

/// Participant index within a game; 0 moves first.
pub type Seat = u8; // 0..=1

/// Symbol placed into a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The first joiner plays `X`, the second `O`.
    pub fn for_seat(seat: Seat) -> Self {
        if seat == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nine cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    /// Returns `None` for positions outside the board.
    pub fn get(&self, position: usize) -> Option<Option<Mark>> {
        self.cells.get(position).copied()
    }

    pub fn is_occupied(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Some(_)))
    }

    /// Callers check occupancy first; an occupied cell is never overwritten.
    pub(crate) fn place(&mut self, position: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(position) {
            if cell.is_none() {
                *cell = Some(mark);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [None; CELLS];
    }

    /// The first fully-occupied, uniform line, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.iter().copied().find(|&[a, b, c]| {
            matches!(
                (self.cells[a], self.cells[b], self.cells[c]),
                (Some(x), Some(y), Some(z)) if x == y && y == z
            )
        })
    }

    pub fn has_winning_line(&self) -> bool {
        self.winning_line().is_some()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}
