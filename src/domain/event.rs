use serde::{Deserialize, Serialize};

/// Event name every relayed payload is emitted under.
pub const DB_UPDATE_EVENT: &str = "db_update";

/// A relayed channel notification as it travels over the socket.
///
/// The payload is opaque: it is never parsed and is forwarded byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayEvent {
    pub event: String,
    pub payload: String,
}

impl RelayEvent {
    pub fn db_update(payload: impl Into<String>) -> Self {
        Self {
            event: DB_UPDATE_EVENT.to_string(),
            payload: payload.into(),
        }
    }

    pub fn is_db_update(&self) -> bool {
        self.event == DB_UPDATE_EVENT
    }
}
