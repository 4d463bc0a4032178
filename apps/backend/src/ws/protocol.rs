use serde::{Deserialize, Serialize};

use crate::domain::snapshot::GameSnapshot;
use crate::services::lobby::LobbyEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    FindGame,
    /// Range is checked by the engine, so any integer parses.
    MakeMove { position: i64 },
    ResetGame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    WaitingForPlayer,

    GameStart { state: GameSnapshot },

    GameUpdate { state: GameSnapshot },

    PlayerDisconnected,

    Error { code: ErrorCode, message: String },
}

impl From<LobbyEvent> for ServerMsg {
    fn from(event: LobbyEvent) -> Self {
        match event {
            LobbyEvent::WaitingForPlayer => ServerMsg::WaitingForPlayer,
            LobbyEvent::GameStart(state) => ServerMsg::GameStart { state },
            LobbyEvent::GameUpdate(state) => ServerMsg::GameUpdate { state },
            LobbyEvent::PlayerDisconnected => ServerMsg::PlayerDisconnected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
        }
    }
}
