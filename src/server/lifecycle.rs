use crate::{Error, Result};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Idle,
    Serving,
    ShuttingDown,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerEvent {
    Bound,
    InterruptReceived,
    ListenerClosed,
}

#[derive(Debug)]
pub struct ServerLifecycle {
    state: ServerState,
}

impl ServerLifecycle {
    pub fn new() -> Self {
        Self {
            state: ServerState::Idle,
        }
    }

    pub fn current_state(&self) -> ServerState {
        self.state
    }

    pub fn transition(&mut self, event: ServerEvent) -> Result<ServerState> {
        let new_state = match (self.state, event) {
            (ServerState::Idle, ServerEvent::Bound) => ServerState::Serving,
            (ServerState::Serving, ServerEvent::InterruptReceived) => ServerState::ShuttingDown,
            (ServerState::ShuttingDown, ServerEvent::ListenerClosed) => ServerState::Stopped,
            _ => {
                warn!(
                    "Invalid server transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "Server state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );
        self.state = new_state;
        Ok(new_state)
    }
}

impl Default for ServerLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
