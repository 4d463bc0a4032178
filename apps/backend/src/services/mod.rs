pub mod lobby;

pub use lobby::{Dispatch, Lobby, LobbyError, LobbyEvent};
