use serde::{Deserialize, Serialize};

use crate::domain::board::{Mark, Seat};
use crate::domain::rules::CELLS;

/// Full game state pushed to every participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: [Option<Mark>; CELLS],
    pub current_player: Seat,
    pub game_over: bool,
    /// `None` while in progress and for draws.
    pub winner: Option<Seat>,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub symbol: Mark,
    pub id: String,
}
