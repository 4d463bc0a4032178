use std::collections::HashMap;

use actix::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::game::ConnId;
use crate::services::lobby::{Dispatch, Lobby, LobbyError};
use crate::ws::session::HubEvent;

/// Registers a session so the hub can deliver events to it.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: ConnId,
    pub recipient: Recipient<HubEvent>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: ConnId,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct FindGame {
    pub conn_id: ConnId,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct MakeMove {
    pub conn_id: ConnId,
    pub position: i64,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ResetGame {
    pub conn_id: ConnId,
}

#[derive(Message)]
#[rtype(result = "HubStats")]
pub struct GetStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HubStats {
    pub connections: usize,
    pub live_games: usize,
    pub waiting_games: usize,
}

/// Single owner of the lobby.
///
/// Every connection event arrives through this actor's mailbox, so the
/// waiting queue and live games are mutated by one handler at a time.
#[derive(Default)]
pub struct MatchHub {
    lobby: Lobby,
    connections: HashMap<ConnId, Recipient<HubEvent>>,
}

impl MatchHub {
    pub fn new(lobby: Lobby) -> Self {
        Self {
            lobby,
            connections: HashMap::new(),
        }
    }

    fn deliver(&self, outcome: Result<Vec<Dispatch>, LobbyError>, action: &'static str) {
        let dispatches = match outcome {
            Ok(dispatches) => dispatches,
            Err(err) => {
                debug!(action, error = %err, "[WS HUB] event ignored");
                return;
            }
        };

        for Dispatch { to, event } in dispatches {
            match self.connections.get(&to) {
                Some(recipient) => recipient.do_send(HubEvent(event)),
                None => debug!(conn_id = %to, action, "[WS HUB] recipient already gone"),
            }
        }
    }

    fn stats(&self) -> HubStats {
        HubStats {
            connections: self.connections.len(),
            live_games: self.lobby.live_games(),
            waiting_games: self.lobby.waiting_games(),
        }
    }
}

impl Actor for MatchHub {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[WS HUB] started");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        let stats = self.stats();
        info!(
            connections = stats.connections,
            live_games = stats.live_games,
            "[WS HUB] stopped"
        );
    }
}

impl Handler<Connect> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        self.connections.insert(msg.conn_id, msg.recipient);
    }
}

impl Handler<Disconnect> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) -> Self::Result {
        self.connections.remove(&msg.conn_id);
        let outcome = self.lobby.disconnect(msg.conn_id);
        self.deliver(outcome, "disconnect");
    }
}

impl Handler<FindGame> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: FindGame, _ctx: &mut Self::Context) -> Self::Result {
        let outcome = self.lobby.find_game(msg.conn_id);
        self.deliver(outcome, "find_game");
    }
}

impl Handler<MakeMove> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: MakeMove, _ctx: &mut Self::Context) -> Self::Result {
        let outcome = self.lobby.make_move(msg.conn_id, msg.position);
        self.deliver(outcome, "make_move");
    }
}

impl Handler<ResetGame> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: ResetGame, _ctx: &mut Self::Context) -> Self::Result {
        let outcome = self.lobby.reset_game(msg.conn_id);
        self.deliver(outcome, "reset_game");
    }
}

impl Handler<GetStats> for MatchHub {
    type Result = MessageResult<GetStats>;

    fn handle(&mut self, _msg: GetStats, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.stats())
    }
}
