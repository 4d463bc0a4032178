use actix::Addr;

use crate::config::ServerConfig;
use crate::ws::hub::MatchHub;

/// Application state shared with every handler
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    hub: Addr<MatchHub>,
}

impl AppState {
    /// The hub must already be running; handlers only hold its address.
    pub fn new(config: ServerConfig, hub: Addr<MatchHub>) -> Self {
        Self { config, hub }
    }

    pub fn hub(&self) -> Addr<MatchHub> {
        self.hub.clone()
    }
}
