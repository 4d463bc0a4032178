//! Matchmaking and per-game state for every live connection.
//!
//! `Lobby` is plain synchronous state. It is owned by exactly one
//! `MatchHub` actor, which feeds it one connection event at a time; each
//! handler returns the events to deliver instead of performing I/O.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::game::{ConnId, Game, GameId, Status};
use crate::domain::snapshot::GameSnapshot;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::utils::game_code::{GameIdSource, RandomGameIds};

/// Outbound notification for a single connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyEvent {
    WaitingForPlayer,
    GameStart(GameSnapshot),
    GameUpdate(GameSnapshot),
    PlayerDisconnected,
}

/// An event addressed to one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub to: ConnId,
    pub event: LobbyEvent,
}

/// Why a connection event produced nothing. None of these reach the client.
#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("connection {0} is not bound to a live game")]
    UnknownSession(ConnId),
    #[error("connection {0} is already bound to a game")]
    AlreadySeated(ConnId),
    #[error("invalid move: {0}")]
    InvalidMove(#[source] DomainError),
}

pub struct Lobby {
    games: HashMap<GameId, Game>,
    waiting: VecDeque<GameId>,
    bindings: HashMap<ConnId, GameId>,
    ids: Box<dyn GameIdSource>,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

impl Lobby {
    pub fn new() -> Self {
        Self::with_id_source(RandomGameIds)
    }

    pub fn with_id_source(ids: impl GameIdSource + 'static) -> Self {
        Self {
            games: HashMap::new(),
            waiting: VecDeque::new(),
            bindings: HashMap::new(),
            ids: Box::new(ids),
        }
    }

    pub fn live_games(&self) -> usize {
        self.games.len()
    }

    pub fn waiting_games(&self) -> usize {
        self.waiting.len()
    }

    pub fn game_of(&self, conn_id: ConnId) -> Option<&Game> {
        self.bindings
            .get(&conn_id)
            .and_then(|game_id| self.games.get(game_id))
    }

    /// Pair with the oldest waiting game, or open a new one.
    pub fn find_game(&mut self, conn_id: ConnId) -> Result<Vec<Dispatch>, LobbyError> {
        if self.bindings.contains_key(&conn_id) {
            return Err(LobbyError::AlreadySeated(conn_id));
        }

        if let Some(game_id) = self.waiting.pop_front() {
            let joined = self
                .games
                .get_mut(&game_id)
                .map(|game| game.add_participant(conn_id));

            match joined {
                Some(Ok(_)) => {
                    self.bindings.insert(conn_id, game_id.clone());
                    info!(game_id = %game_id, conn_id = %conn_id, "[LOBBY] game started");
                    return Ok(self.broadcast(&game_id, LobbyEvent::GameStart));
                }
                Some(Err(err)) => {
                    warn!(
                        game_id = %game_id,
                        conn_id = %conn_id,
                        error = %err,
                        "[LOBBY] queue race: waiting game already full, opening a fresh game"
                    );
                }
                None => {
                    warn!(
                        game_id = %game_id,
                        conn_id = %conn_id,
                        "[LOBBY] queue race: waiting game no longer live, opening a fresh game"
                    );
                }
            }
        }

        Ok(self.open_game(conn_id))
    }

    pub fn make_move(
        &mut self,
        conn_id: ConnId,
        position: i64,
    ) -> Result<Vec<Dispatch>, LobbyError> {
        let game_id = self.bound_game_id(conn_id)?;
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(LobbyError::UnknownSession(conn_id))?;
        let seat = game
            .seat_of(conn_id)
            .ok_or(LobbyError::UnknownSession(conn_id))?;

        let Ok(position) = usize::try_from(position) else {
            return Err(LobbyError::InvalidMove(DomainError::validation(
                ValidationKind::PositionOutOfRange,
                format!("Position {position} is off the board"),
            )));
        };

        let status = game
            .apply_move(position, seat)
            .map_err(LobbyError::InvalidMove)?;

        match status {
            Status::Won { by } => {
                info!(game_id = %game_id, winner = by, "[LOBBY] game ended");
            }
            Status::Draw => info!(game_id = %game_id, "[LOBBY] game ended in a draw"),
            Status::InProgress => {}
        }

        Ok(self.broadcast(&game_id, LobbyEvent::GameUpdate))
    }

    pub fn reset_game(&mut self, conn_id: ConnId) -> Result<Vec<Dispatch>, LobbyError> {
        let game_id = self.bound_game_id(conn_id)?;
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(LobbyError::UnknownSession(conn_id))?;

        game.reset();
        debug!(game_id = %game_id, conn_id = %conn_id, "[LOBBY] game reset");

        Ok(self.broadcast(&game_id, LobbyEvent::GameUpdate))
    }

    /// Tear down the connection's game and notify whoever else was in it.
    pub fn disconnect(&mut self, conn_id: ConnId) -> Result<Vec<Dispatch>, LobbyError> {
        let game_id = self
            .bindings
            .remove(&conn_id)
            .ok_or(LobbyError::UnknownSession(conn_id))?;
        let game = self
            .games
            .remove(&game_id)
            .ok_or(LobbyError::UnknownSession(conn_id))?;

        self.waiting.retain(|queued| *queued != game_id);

        let dispatches: Vec<Dispatch> = game
            .participants()
            .iter()
            .filter(|p| p.conn_id != conn_id)
            .map(|p| Dispatch {
                to: p.conn_id,
                event: LobbyEvent::PlayerDisconnected,
            })
            .collect();

        for dispatch in &dispatches {
            self.bindings.remove(&dispatch.to);
        }

        info!(
            game_id = %game_id,
            conn_id = %conn_id,
            notified = dispatches.len(),
            "[LOBBY] player disconnected, game removed"
        );

        Ok(dispatches)
    }

    fn open_game(&mut self, conn_id: ConnId) -> Vec<Dispatch> {
        let game_id = self.fresh_game_id();
        self.games
            .insert(game_id.clone(), Game::opened_by(game_id.clone(), conn_id));
        self.bindings.insert(conn_id, game_id.clone());
        self.waiting.push_back(game_id.clone());

        info!(game_id = %game_id, conn_id = %conn_id, "[LOBBY] new game created");

        vec![Dispatch {
            to: conn_id,
            event: LobbyEvent::WaitingForPlayer,
        }]
    }

    fn fresh_game_id(&mut self) -> GameId {
        loop {
            let candidate = self.ids.next_game_id();
            if !self.games.contains_key(&candidate) {
                return candidate;
            }
            debug!(game_id = %candidate, "[LOBBY] game id collision, drawing again");
        }
    }

    fn bound_game_id(&self, conn_id: ConnId) -> Result<GameId, LobbyError> {
        self.bindings
            .get(&conn_id)
            .cloned()
            .ok_or(LobbyError::UnknownSession(conn_id))
    }

    fn broadcast(
        &self,
        game_id: &GameId,
        event: impl Fn(GameSnapshot) -> LobbyEvent,
    ) -> Vec<Dispatch> {
        let Some(game) = self.games.get(game_id) else {
            return Vec::new();
        };
        let snapshot = game.snapshot();
        game.participants()
            .iter()
            .map(|p| Dispatch {
                to: p.conn_id,
                event: event(snapshot.clone()),
            })
            .collect()
    }
}
