use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::board::{Board, Mark, Seat};
use crate::domain::rules::{CELLS, PLAYERS};
use crate::domain::snapshot::{GameSnapshot, PlayerSummary};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Identity of a live websocket connection.
pub type ConnId = Uuid;

/// Opaque identity of a live game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A connection bound into a game with its mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub conn_id: ConnId,
    pub mark: Mark,
}

/// Terminal status of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { by: Seat },
    Draw,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Lifecycle of a game as seen by the lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than two participants bound.
    WaitingForOpponent,
    InProgress,
    Won { by: Seat },
    Draw,
}

/// One game: its board, bound participants, turn and status.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    board: Board,
    participants: Vec<Participant>,
    turn: Seat,
    status: Status,
}

impl Game {
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            board: Board::empty(),
            participants: Vec::with_capacity(PLAYERS),
            turn: 0,
            status: Status::InProgress,
        }
    }

    /// A fresh game with `creator` already holding seat 0.
    pub fn opened_by(id: GameId, creator: ConnId) -> Self {
        let mut game = Self::new(id);
        game.participants.push(Participant {
            conn_id: creator,
            mark: Mark::for_seat(0),
        });
        game
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= PLAYERS
    }

    pub fn phase(&self) -> Phase {
        if !self.is_full() {
            return Phase::WaitingForOpponent;
        }
        match self.status {
            Status::InProgress => Phase::InProgress,
            Status::Won { by } => Phase::Won { by },
            Status::Draw => Phase::Draw,
        }
    }

    /// Binds `conn_id` to the next free seat.
    pub fn add_participant(&mut self, conn_id: ConnId) -> Result<Seat, DomainError> {
        if self.is_full() {
            return Err(DomainError::conflict(
                ConflictKind::GameFull,
                format!("game {} already has {PLAYERS} participants", self.id),
            ));
        }
        let seat = self.participants.len() as Seat;
        self.participants.push(Participant {
            conn_id,
            mark: Mark::for_seat(seat),
        });
        Ok(seat)
    }

    pub fn seat_of(&self, conn_id: ConnId) -> Option<Seat> {
        self.participants
            .iter()
            .position(|p| p.conn_id == conn_id)
            .map(|idx| idx as Seat)
    }

    /// Places the acting seat's mark, then resolves win, draw, or the next turn.
    ///
    /// A rejected move leaves the game untouched.
    pub fn apply_move(&mut self, position: usize, seat: Seat) -> Result<Status, DomainError> {
        if position >= CELLS {
            return Err(DomainError::validation(
                ValidationKind::PositionOutOfRange,
                format!("position {position} is off the board"),
            ));
        }
        if self.status.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "Game is over",
            ));
        }
        if self.board.is_occupied(position) {
            return Err(DomainError::validation(
                ValidationKind::CellOccupied,
                format!("cell {position} is occupied"),
            ));
        }
        if seat != self.turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }

        self.board.place(position, Mark::for_seat(seat));

        if self.evaluate_win() {
            self.status = Status::Won { by: seat };
        } else if self.evaluate_draw() {
            self.status = Status::Draw;
        } else {
            self.turn = 1 - self.turn;
        }
        Ok(self.status)
    }

    pub fn evaluate_win(&self) -> bool {
        self.board.has_winning_line()
    }

    /// Win is checked first; a full board with a line is not a draw.
    pub fn evaluate_draw(&self) -> bool {
        self.board.is_full() && !self.evaluate_win()
    }

    /// Clears the board and status; participant bindings are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = 0;
        self.status = Status::InProgress;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.board.cells(),
            current_player: self.turn,
            game_over: self.status.is_terminal(),
            winner: match self.status {
                Status::Won { by } => Some(by),
                _ => None,
            },
            players: self
                .participants
                .iter()
                .map(|p| PlayerSummary {
                    symbol: p.mark,
                    id: p.conn_id.to_string(),
                })
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(id: GameId, board: Board) -> Self {
        let mut game = Self::new(id);
        game.board = board;
        game
    }
}
