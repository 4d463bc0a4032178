//! Game identity generation.
//!
//! Game ids are 10-character strings over Crockford's Base32 alphabet drawn
//! from the thread-local CSPRNG (50 bits per id). The lobby re-draws on the
//! rare collision with a live game, so ids only need to be unique among
//! games alive at the same time.

use rand::Rng;

use crate::domain::game::GameId;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const GAME_CODE_LEN: usize = 10;

/// Source of fresh game identities.
pub trait GameIdSource: Send {
    fn next_game_id(&mut self) -> GameId;
}

/// Default source backed by [`generate_game_code`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGameIds;

impl GameIdSource for RandomGameIds {
    fn next_game_id(&mut self) -> GameId {
        GameId::new(generate_game_code())
    }
}

/// Generate a random game code.
pub fn generate_game_code() -> String {
    let mut rng = rand::rng();
    (0..GAME_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}
