//! Domain layer: pure board engine types and helpers.

pub mod board;
pub mod game;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_board;

// Re-exports for ergonomics
pub use board::{Board, Mark, Seat};
pub use game::{ConnId, Game, GameId, Participant, Phase, Status};
pub use snapshot::{GameSnapshot, PlayerSummary};
