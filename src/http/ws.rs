use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tracing::{debug, info, warn};

use crate::AppState;

/// Upgrades to the relay socket. No handshake or authentication.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let mut subscription = state.hub.subscribe();
    info!(clients = state.hub.connection_count(), "client connected");

    loop {
        tokio::select! {
            event = subscription.recv() => {
                let Some(event) = event else { break };
                let text = match serde_json::to_string(&event) {
                    Ok(text) => text,
                    Err(err) => {
                        warn!(error = ?err, "failed to encode relay event");
                        continue;
                    }
                };
                if socket.send(Message::Text(text)).await.is_err() {
                    debug!("send failed, client gone");
                    break;
                }
            }
            frame = socket.recv() => {
                // Pings are answered by the protocol layer on the next read.
                match frame {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        debug!(error = ?err, "socket error");
                        break;
                    }
                }
            }
        }
    }

    drop(subscription);
    info!(clients = state.hub.connection_count(), "client disconnected");
}
