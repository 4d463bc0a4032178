pub mod hub;
pub mod protocol;
pub mod session;

pub use hub::{HubStats, MatchHub};
pub use protocol::{ClientMsg, ServerMsg};
pub use session::{upgrade, HubEvent, WsSession};
