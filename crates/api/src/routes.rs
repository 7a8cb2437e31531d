use axum::{extract::State, routing::get, Json, Router};

use crate::state::{AppState, StreamInfoResponse};
use crate::ws;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ws/nmea", get(ws::nmea_socket))
        .route("/info", get(stream_info))
        .with_state(state)
}

async fn stream_info(State(state): State<AppState>) -> Json<StreamInfoResponse> {
    Json(state.stream_info())
}
