use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::time::{interval_at, Instant};

use vessel_sim::drift::DriftGenerator;
use vessel_sim::session::SimulationSession;

use crate::state::AppState;

pub async fn nmea_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_telemetry(socket, state))
}

async fn stream_telemetry(mut socket: WebSocket, state: AppState) {
    let settings = state.settings();
    let mut session = SimulationSession::new(
        unix_now_ms(),
        DriftGenerator::new(state.next_drift_seed()),
    );

    // First fire lands one full period after connect, not immediately.
    let period = settings.tick_interval;
    let mut ticker = interval_at(Instant::now() + period, period);

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => {
                        session.close();
                        return;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) => {
                        session.close();
                        return;
                    }
                }
            }
            _ = ticker.tick() => {
                match session.tick(unix_now_ms()) {
                    Some(payload) => {
                        if socket.send(Message::Text(payload)).await.is_err() {
                            session.close();
                            return;
                        }
                    }
                    None => return,
                }
            }
        }
    }
}

fn unix_now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
